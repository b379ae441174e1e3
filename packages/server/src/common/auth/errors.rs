use thiserror::Error;

use super::Role;

/// Role gate errors, raised before a command reaches the engine.
///
/// These are about *who the caller is*. Rights over a specific flat (the
/// assigned-moderator rule) live in `FlatError::Authorization`.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is required")]
    AuthenticationRequired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("invalid role: {0} found, moderator or client required")]
    UnknownRole(String),

    #[error("Forbidden: role {0} is not allowed here")]
    Forbidden(Role),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
