use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("{0} does not belong to this event")]
    NotInEvent(&'static str),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] SubmissionError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    /// Maps a unique violation to a `ConstraintViolation` carrying `message`,
    /// leaving every other error untouched.
    pub fn on_unique_violation(self, message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}

/// Reasons a judge's score submission is rejected before anything is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Judge has no credential and cannot submit scores")]
    PlaceholderJudge,

    #[error("Contestant does not belong to the judge's event")]
    ContestantNotInEvent,

    #[error("Invalid category: {0}")]
    UnknownCategory(Uuid),

    #[error("Invalid score for {category}: not a finite number")]
    NonFiniteScore { category: String },

    #[error("Invalid score for {category}: must be between 0 and {max_score}")]
    ScoreOutOfRange { category: String, max_score: i32 },
}
