use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

/// Connect to the SQLite database and make sure the users table exists.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, DomainError> {
    let db = Database::connect(url).await.map_err(map_db_err)?;
    ensure_schema(&db).await?;
    info!("users schema ready");
    Ok(db)
}

/// Idempotent table creation.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    db.execute_unprepared(CREATE_USERS_TABLE)
        .await
        .map_err(map_db_err)?;
    Ok(())
}
