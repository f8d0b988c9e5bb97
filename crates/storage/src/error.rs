use scoring::ScoringError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when stored rows could not be scored because they break the
    /// club's data rules, as opposed to the database failing.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, StorageError::Scoring(_))
    }
}
