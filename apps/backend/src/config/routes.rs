use std::env;

/// Redirect targets used by the session middleware and the pre-auth gate.
///
/// Host applications can remap both through `AUTH_LOGIN_PATH` and
/// `AUTH_LANDING_PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// Where unauthenticated callers are sent
    pub login_path: String,
    /// Where already-authenticated callers are sent
    pub landing_path: String,
}

impl RouteConfig {
    pub fn new(login_path: impl Into<String>, landing_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            landing_path: landing_path.into(),
        }
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_path: non_empty_var("AUTH_LOGIN_PATH").unwrap_or(defaults.login_path),
            landing_path: non_empty_var("AUTH_LANDING_PATH").unwrap_or(defaults.landing_path),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::new("/auth/login", "/contacts")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
