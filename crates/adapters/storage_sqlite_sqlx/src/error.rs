//! Storage-specific error type wrapping sqlx errors.

use catchup_domain::error::CatchUpError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query, transaction or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CatchUpError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
