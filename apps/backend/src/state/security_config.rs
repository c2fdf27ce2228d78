use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Default session lifetime: one day.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Longest session lifetime `JWT_TTL_SECS` may ask for: ten years.
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Configuration for session token signing and the session cookie
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC-SHA256 key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Lifetime of issued tokens and of the cookie carrying them
    pub token_ttl: Duration,
    /// Whether the session cookie carries the `Secure` attribute
    pub cookie_secure: bool,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret and the default TTL
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            cookie_secure: true,
        }
    }

    pub fn with_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    /// Load from `JWT_SECRET_KEY`, `JWT_TTL_SECS` and `COOKIE_SECURE`.
    ///
    /// A missing or blank secret is an error; the server must not start
    /// without a signing key.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("JWT_SECRET_KEY").unwrap_or_default();
        if secret.trim().is_empty() {
            return Err(AppError::config(
                "JWT_SECRET_KEY must be set to a non-empty value".to_string(),
            ));
        }

        let token_ttl = match env::var("JWT_TTL_SECS") {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!("JWT_TTL_SECS must be a whole number, got '{raw}'"))
                })?;
                if secs == 0 {
                    return Err(AppError::config(
                        "JWT_TTL_SECS must be greater than zero".to_string(),
                    ));
                }
                if secs > MAX_TOKEN_TTL.as_secs() {
                    return Err(AppError::config(format!(
                        "JWT_TTL_SECS must be at most {}, got {secs}",
                        MAX_TOKEN_TTL.as_secs()
                    )));
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        let cookie_secure = env::var("COOKIE_SECURE")
            .ok()
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(true);

        Ok(Self {
            jwt_secret: secret.into_bytes(),
            token_ttl,
            cookie_secure,
        })
    }

    /// Random secret for tests
    #[cfg(test)]
    pub fn for_tests() -> Self {
        use rand::Rng;

        let mut secret = [0u8; 32];
        rand::rng().fill(&mut secret);
        Self::new(secret.to_vec())
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        env::remove_var("JWT_SECRET_KEY");
        env::remove_var("JWT_TTL_SECS");
        env::remove_var("COOKIE_SECURE");
    }

    #[test]
    #[serial_test::serial]
    fn missing_secret_is_fatal() {
        clear_env();
        let err = SecurityConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));

        env::set_var("JWT_SECRET_KEY", "   ");
        let err = SecurityConfig::from_env().unwrap_err();
        clear_env();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    #[serial_test::serial]
    fn reads_secret_and_ttl() {
        clear_env();
        env::set_var("JWT_SECRET_KEY", "s3cret");
        env::set_var("JWT_TTL_SECS", "3600");
        env::set_var("COOKIE_SECURE", "false");
        let config = SecurityConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.jwt_secret, b"s3cret".to_vec());
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert!(!config.cookie_secure);
    }

    #[test]
    #[serial_test::serial]
    fn rejects_bad_ttl() {
        clear_env();
        env::set_var("JWT_SECRET_KEY", "s3cret");
        env::set_var("JWT_TTL_SECS", "soon");
        let bad = SecurityConfig::from_env();
        env::set_var("JWT_TTL_SECS", "0");
        let zero = SecurityConfig::from_env();
        env::set_var("JWT_TTL_SECS", u64::MAX.to_string());
        let huge = SecurityConfig::from_env();
        env::set_var("JWT_TTL_SECS", (MAX_TOKEN_TTL.as_secs() + 1).to_string());
        let over_cap = SecurityConfig::from_env();
        clear_env();

        assert!(matches!(bad, Err(AppError::Config { .. })));
        assert!(matches!(zero, Err(AppError::Config { .. })));
        assert!(matches!(huge, Err(AppError::Config { .. })));
        assert!(matches!(over_cap, Err(AppError::Config { .. })));
    }

    #[test]
    #[serial_test::serial]
    fn accepts_ttl_at_cap() {
        clear_env();
        env::set_var("JWT_SECRET_KEY", "s3cret");
        env::set_var("JWT_TTL_SECS", MAX_TOKEN_TTL.as_secs().to_string());
        let config = SecurityConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.token_ttl, MAX_TOKEN_TTL);
    }

    #[test]
    fn debug_hides_secret() {
        let config = SecurityConfig::new("do-not-print");
        assert!(!format!("{config:?}").contains("do-not-print"));
    }
}
