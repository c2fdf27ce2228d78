use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use contacts_backend::config::db::StoreKind;
use contacts_backend::config::routes::RouteConfig;
use contacts_backend::infra::db::connect_db;
use contacts_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use contacts_backend::repos::users::UserStore;
use contacts_backend::repos::users_memory::MemoryUserStore;
use contacts_backend::routes;
use contacts_backend::state::app_state::AppState;
use contacts_backend::state::security_config::SecurityConfig;
use contacts_backend::SeaUserStore;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let security_config = match SecurityConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid security configuration");
            std::process::exit(1);
        }
    };
    let route_config = RouteConfig::from_env();

    let users: Arc<dyn UserStore> = match StoreKind::from_env() {
        Ok(StoreKind::Sqlite(url)) => match connect_db(&url).await {
            Ok(db) => {
                info!("user store: sqlite");
                Arc::new(SeaUserStore::new(db))
            }
            Err(e) => {
                error!(error = %e, "failed to open user database");
                std::process::exit(1);
            }
        },
        Ok(StoreKind::Memory) => {
            info!("user store: in-memory");
            Arc::new(MemoryUserStore::new())
        }
        Err(e) => {
            error!(error = %e, "invalid DATABASE_URL");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(AppState::new(users, security_config, route_config));

    info!(%host, port, "starting contacts backend");

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .wrap(StructuredLogger)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
