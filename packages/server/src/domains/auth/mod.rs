//! Auth domain - role token issuance and verification
//!
//! Tokens carry the caller's identity and role; the HTTP layer turns them
//! into an [`Actor`](crate::common::Actor) for the role gate.

pub mod jwt;

pub use jwt::{Claims, JwtService};
