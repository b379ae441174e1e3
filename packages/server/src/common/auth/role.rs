use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AuthError;
use crate::common::UserId;

/// Caller role as issued in the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Moderator => "moderator",
        }
    }

    pub fn is_moderator(&self) -> bool {
        matches!(self, Role::Moderator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "moderator" => Ok(Role::Moderator),
            other => Err(AuthError::UnknownRole(other.to_string())),
        }
    }
}

/// An authenticated caller: identity plus role.
///
/// Usage:
/// ```
/// use rent_core::common::{Actor, Role, UserId};
///
/// let actor = Actor::new(UserId::new(), Role::Moderator);
/// assert!(actor.require(&[Role::Moderator]).is_ok());
/// assert!(actor.require(&[Role::Client]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Check the actor holds one of `allowed` roles.
    pub fn require(&self, allowed: &[Role]) -> Result<(), AuthError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AuthError::Forbidden(self.role))
        }
    }
}
