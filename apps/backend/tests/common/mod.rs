#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, LOCATION};
use contacts_backend::auth::cookie::SESSION_COOKIE;
use contacts_backend::{AppState, MemoryUserStore, RouteConfig, SecurityConfig};

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const TEST_SECRET: &[u8] = b"integration-test-secret-key-for-session-tokens";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// Fresh in-memory state with default login/landing routes.
pub fn test_state() -> AppState {
    AppState::in_memory(test_security())
}

/// Fresh in-memory state with custom login/landing routes.
pub fn test_state_with_routes(login: &str, landing: &str) -> AppState {
    AppState::new(
        Arc::new(MemoryUserStore::new()),
        test_security(),
        RouteConfig::new(login, landing),
    )
}

pub fn header<B>(resp: &ServiceResponse<B>, name: &str) -> Option<String> {
    resp.headers()
        .get(HeaderName::from_bytes(name.as_bytes()).ok()?)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// The session cookie set by a response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}
