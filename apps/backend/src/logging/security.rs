use tracing::{info, warn};

use crate::auth::token::TokenError;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a security-relevant login failure event.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// Log a rejected session cookie. The token itself is never logged.
pub fn session_rejected(err: TokenError, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SESSION_REJECTED",
        %trace_id,
        reason = err.reason(),
        path,
        "Session token rejected"
    );
}

/// Log a request for a protected page that carried no session cookie.
pub fn session_missing(path: &str) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_SESSION_MISSING",
        %trace_id,
        path,
        "No session token provided"
    );
}
