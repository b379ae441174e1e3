use thiserror::Error;

use crate::common::ValidationError;

/// Failures of the house repository.
#[derive(Error, Debug)]
pub enum HouseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}
