//! Task-local trace id for the request being handled.
//!
//! `RequestTrace` sets the id twice per request: around the synchronous
//! `call()` of the inner services, so middleware that logs before returning
//! its future (`SessionGate`) sees it, and around the response future itself.
//! Error responses and security events read it back with [`trace_id`].

use std::future::Future;

use tokio::task_local;

const UNKNOWN: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// The current request's trace id, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(String::clone)
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `f` synchronously with `trace_id` in scope.
pub fn sync_scope<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(trace_id, f)
}

/// Drive `future` to completion with `trace_id` in scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_outside_any_scope() {
        assert_eq!(trace_id(), "unknown");
    }

    #[test]
    fn sync_scope_is_visible_and_then_gone() {
        let seen = sync_scope("req-sync".to_string(), trace_id);
        assert_eq!(seen, "req-sync");
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn future_scope_survives_await_points() {
        let seen = with_trace_id("req-async".to_string(), async {
            tokio::task::yield_now().await;
            trace_id()
        })
        .await;

        assert_eq!(seen, "req-async");
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn inner_scope_shadows_outer() {
        with_trace_id("outer".to_string(), async {
            assert_eq!(sync_scope("inner".to_string(), trace_id), "inner");
            assert_eq!(trace_id(), "outer");
        })
        .await;
    }
}
