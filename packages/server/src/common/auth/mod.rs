//! Role gate for the rental service.
//!
//! The HTTP layer authenticates the bearer token and builds an [`Actor`];
//! handlers then check the route's allowed roles:
//!
//! ```rust
//! use rent_core::common::{Actor, Role, UserId};
//!
//! let actor = Actor::new(UserId::new(), Role::Client);
//! actor.require(&[Role::Moderator, Role::Client]).unwrap();
//! ```
//!
//! The engine trusts the actor's identity but re-checks per-flat rules itself.

mod errors;
mod role;

pub use errors::AuthError;
pub use role::{Actor, Role};
