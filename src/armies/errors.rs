use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmyError {
    /// No active row matched; missing and soft-deleted ids look the same.
    #[error("army {0} not found")]
    NotFound(i64),
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("database call timed out after {0:?}")]
    Timeout(Duration),
}

pub type ArmyResult<T> = Result<T, ArmyError>;
