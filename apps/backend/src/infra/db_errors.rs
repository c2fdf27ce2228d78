//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `DomainError` here, and higher
//! layers map `DomainError` to `AppError` via `From`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

/// Map SQLite "UNIQUE constraint failed: table.column" detail to a conflict kind.
fn conflict_kind(detail: &str) -> ConflictKind {
    if detail.contains("users.email") {
        ConflictKind::UniqueEmail
    } else {
        ConflictKind::Other(detail.to_string())
    }
}

pub fn map_db_err(err: DbErr) -> DomainError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        warn!(%detail, "unique constraint violation");
        return DomainError::conflict(conflict_kind(&detail), detail);
    }

    match err {
        DbErr::ConnectionAcquire(e) => {
            error!(error = %e, "database connection unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, format!("connection: {e}"))
        }
        DbErr::Conn(e) => {
            error!(error = %e, "database connection failed");
            DomainError::infra(InfraErrorKind::DbUnavailable, format!("connection: {e}"))
        }
        other => {
            error!(error = %other, "database error");
            DomainError::infra(
                InfraErrorKind::Other("Database error".to_string()),
                other.to_string(),
            )
        }
    }
}
