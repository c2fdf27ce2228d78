#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod forms;
pub mod http;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::users_sea::SeaUserStore;
pub use auth::claims::Claims;
pub use auth::token::{TokenCodec, TokenError};
pub use config::db::StoreKind;
pub use config::routes::RouteConfig;
pub use error::AppError;
pub use extractors::identity::Identity;
pub use infra::db::connect_db;
pub use middleware::pre_auth::RedirectIfAuthenticated;
pub use middleware::request_trace::RequestTrace;
pub use middleware::session::SessionGate;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use repos::users::{UserRecord, UserStore};
pub use repos::users_memory::MemoryUserStore;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
