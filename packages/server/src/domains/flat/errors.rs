use thiserror::Error;

use super::models::FlatStatus;
use crate::common::{FlatId, ValidationError};

/// Failures of the flat lifecycle engine.
///
/// Every variant is returned only after the enclosing transaction has been
/// rolled back. Nothing here is retried by the engine.
#[derive(Error, Debug)]
pub enum FlatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested status change is not an edge of the state machine.
    #[error("{0}")]
    Transition(String),

    /// The caller has the moderator role but not the rights over this flat.
    #[error("{0}")]
    Authorization(String),

    #[error("flat {0} not found")]
    NotFound(FlatId),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl FlatError {
    pub fn cannot_start_moderation(current: FlatStatus) -> Self {
        FlatError::Transition(format!(
            "cannot put flat into moderation from status {}",
            current
        ))
    }

    pub fn not_on_moderation() -> Self {
        FlatError::Transition(format!(
            "flat must be in status {} to be approved or declined",
            FlatStatus::OnModeration
        ))
    }

    pub fn invalid_target(desired: FlatStatus) -> Self {
        FlatError::Transition(format!("invalid status change: {}", desired))
    }

    pub fn not_assigned_moderator() -> Self {
        FlatError::Authorization("only the assigned moderator can change the status".to_string())
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, FlatError::Transition(_))
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, FlatError::Authorization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_states() {
        assert_eq!(
            FlatError::cannot_start_moderation(FlatStatus::Approved).to_string(),
            "cannot put flat into moderation from status approved"
        );
        assert_eq!(
            FlatError::not_on_moderation().to_string(),
            "flat must be in status on_moderation to be approved or declined"
        );
        assert_eq!(
            FlatError::invalid_target(FlatStatus::Created).to_string(),
            "invalid status change: created"
        );
        assert_eq!(
            FlatError::not_assigned_moderator().to_string(),
            "only the assigned moderator can change the status"
        );
    }
}
