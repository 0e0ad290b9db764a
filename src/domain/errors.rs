//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Id does not resolve to a record; carries the entity name
    #[error("{0} not found")]
    NotFound(&'static str),
    /// One or more field rules were violated
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// Storage rejected a write
    #[error("{0}")]
    ConstraintViolation(String),
    /// Read-side database failure
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Classify a failed write into a stable, client-facing message.
    ///
    /// The raw database text is logged and dropped.
    pub fn from_commit(err: DbErr) -> Self {
        tracing::warn!("Commit rejected by storage: {}", err);

        let message = match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => FOREIGN_KEY_MESSAGE,
            Some(SqlErr::UniqueConstraintViolation(_)) => UNIQUE_MESSAGE,
            _ => {
                let raw = err.to_string();
                if raw.contains("FOREIGN KEY constraint failed") {
                    FOREIGN_KEY_MESSAGE
                } else if raw.contains("CHECK constraint failed")
                    || raw.contains("NOT NULL constraint failed")
                {
                    CHECK_MESSAGE
                } else {
                    COMMIT_MESSAGE
                }
            }
        };

        DomainError::ConstraintViolation(message.to_string())
    }
}

pub const FOREIGN_KEY_MESSAGE: &str = "Referenced hero or power does not exist";
pub const CHECK_MESSAGE: &str = "A field value violates a storage constraint";
pub const UNIQUE_MESSAGE: &str = "Record already exists";
pub const COMMIT_MESSAGE: &str = "Could not commit changes";

// Conversion from SeaORM errors (used in infrastructure layer for reads)
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
