use rusqlite::ErrorCode;
use rusqlite::ffi;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("SQLite error: {0}")]
    RusqliteError(rusqlite::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unique constraint conflict: {0}")]
    UniqueConstraintConflict(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<rusqlite::Error> for SeedError {
    /// Constraint and connectivity failures get their own kinds so callers can
    /// tell data errors from transient ones without inspecting SQLite codes.
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, _) = &err {
            match code.code {
                ErrorCode::ConstraintViolation
                    if code.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                        || code.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
                {
                    return SeedError::UniqueConstraintConflict(err.to_string());
                }
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked | ErrorCode::CannotOpen => {
                    return SeedError::StoreUnavailable(err.to_string());
                }
                _ => {}
            }
        }
        SeedError::RusqliteError(err)
    }
}

impl SeedError {
    /// Short machine-readable kind, used in phase reports and audit lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SeedError::RusqliteError(_) => "sqlite",
            SeedError::IoError(_) => "io",
            SeedError::JsonError(_) => "json",
            SeedError::ConfigError(_) => "config",
            SeedError::ValidationError(_) => "validation",
            SeedError::NotFound(_) => "not_found",
            SeedError::UniqueConstraintConflict(_) => "unique_conflict",
            SeedError::StoreUnavailable(_) => "store_unavailable",
        }
    }
}
