use actix_web::cookie::{Cookie, SameSite};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Session cookie expiring together with the token it carries.
pub fn session_cookie(
    token: String,
    security: &SecurityConfig,
    now: OffsetDateTime,
) -> Result<Cookie<'static>, AppError> {
    let expires = time::Duration::try_from(security.token_ttl)
        .ok()
        .and_then(|ttl| now.checked_add(ttl))
        .ok_or_else(|| {
            AppError::config(format!(
                "Session cookie expiry is out of range for a {}s TTL",
                security.token_ttl.as_secs()
            ))
        })?;

    Ok(Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(security.cookie_secure)
        .same_site(SameSite::Strict)
        .expires(expires)
        .finish())
}

/// Replacement cookie that makes the browser drop the session.
pub fn expired_session_cookie(security: &SecurityConfig) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(security.cookie_secure)
        .same_site(SameSite::Strict)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .max_age(time::Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let security = SecurityConfig::new("k").with_ttl(Duration::from_secs(7200));
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let cookie = session_cookie("abc.def.ghi".to_string(), &security, now).unwrap();

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc.def.ghi");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(
            cookie.expires_datetime(),
            Some(OffsetDateTime::from_unix_timestamp(1_700_007_200).unwrap())
        );
    }

    #[test]
    fn unrepresentable_expiry_is_an_error() {
        let security = SecurityConfig::new("k").with_ttl(Duration::from_secs(u64::MAX));
        let result = session_cookie("t".to_string(), &security, OffsetDateTime::now_utc());
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn expired_cookie_clears_session() {
        let cookie = expired_session_cookie(&SecurityConfig::new("k"));
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
    }
}
