use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::auth::token::TokenCodec;
use crate::config::routes::RouteConfig;
use crate::repos::users::UserStore;
use crate::repos::users_memory::MemoryUserStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// User record lookup and creation
    pub users: Arc<dyn UserStore>,
    /// Security configuration including signing key and TTL
    pub security: SecurityConfig,
    /// Token codec built from `security`
    pub tokens: TokenCodec,
    /// Login and landing redirect targets
    pub routes: RouteConfig,
}

impl AppState {
    /// Create a new AppState with the given user store and security config
    pub fn new(users: Arc<dyn UserStore>, security: SecurityConfig, routes: RouteConfig) -> Self {
        let tokens = TokenCodec::new(&security);
        Self {
            users,
            security,
            tokens,
            routes,
        }
    }

    /// AppState over an empty in-memory store with default routes
    pub fn in_memory(security: SecurityConfig) -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            security,
            RouteConfig::default(),
        )
    }

    /// Create a test AppState over an in-memory store and a random secret
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::in_memory(SecurityConfig::for_tests())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("security", &self.security)
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}
