use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::warn;

use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    store: &'static str,
}

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.users.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            app_version: env!("CARGO_PKG_VERSION"),
            store: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "health check: user store unavailable");
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded",
                app_version: env!("CARGO_PKG_VERSION"),
                store: "error",
            })
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
