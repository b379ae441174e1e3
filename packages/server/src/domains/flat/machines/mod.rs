use crate::common::UserId;
use crate::domains::flat::errors::FlatError;
use crate::domains::flat::models::{FlatStatus, LockedFlat};

/// The write a legal transition performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatCommand {
    /// `created` -> `on_moderation`, assigning the acting moderator.
    StartModeration { moderator_id: UserId },
    /// `on_moderation` -> `approved` | `declined`.
    Resolve { status: FlatStatus },
}

/// Flat state machine - pure decision logic
///
/// ```text
/// created ──(any moderator)──> on_moderation
/// on_moderation ──(assigned moderator)──> approved | declined
/// ```
///
/// Runs against the row read under `FOR UPDATE`, so the decision cannot be
/// invalidated before the write commits.
pub struct FlatMachine;

impl FlatMachine {
    pub fn decide(
        current: &LockedFlat,
        actor: UserId,
        desired: FlatStatus,
    ) -> Result<FlatCommand, FlatError> {
        if desired == FlatStatus::OnModeration {
            if current.status != FlatStatus::Created {
                return Err(FlatError::cannot_start_moderation(current.status));
            }
            return Ok(FlatCommand::StartModeration {
                moderator_id: actor,
            });
        }

        if current.status != FlatStatus::OnModeration {
            return Err(FlatError::not_on_moderation());
        }
        if !matches!(desired, FlatStatus::Approved | FlatStatus::Declined) {
            return Err(FlatError::invalid_target(desired));
        }
        if current.moderator_id != Some(actor) {
            return Err(FlatError::not_assigned_moderator());
        }

        Ok(FlatCommand::Resolve { status: desired })
    }
}
