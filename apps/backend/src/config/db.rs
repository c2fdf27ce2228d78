use std::env;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://contacts.db?mode=rwc";

/// Which user store backs the running application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    /// SQLite database reached through SeaORM
    Sqlite(String),
    /// Process-local store, contents lost on restart
    Memory,
}

impl StoreKind {
    /// Read `DATABASE_URL`; `memory` selects the in-process store.
    pub fn from_env() -> Result<Self, AppError> {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self::parse(&url)
    }

    pub fn parse(url: &str) -> Result<Self, AppError> {
        let url = url.trim();
        if url.eq_ignore_ascii_case("memory") {
            return Ok(StoreKind::Memory);
        }
        if url.starts_with("sqlite:") {
            return Ok(StoreKind::Sqlite(url.to_string()));
        }
        Err(AppError::config(format!(
            "DATABASE_URL must be a sqlite: URL or 'memory', got '{url}'"
        )))
    }
}
