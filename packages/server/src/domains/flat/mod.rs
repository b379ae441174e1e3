//! Flat domain - the flat lifecycle engine
//!
//! Creates flats and drives their moderation status:
//!
//! ```text
//! created ──> on_moderation ──> approved | declined
//! ```
//!
//! Decisions are made by [`machines::FlatMachine`] against the row read under
//! a row lock; the actions own the transaction around it.

pub mod actions;
pub mod data;
pub mod errors;
pub mod machines;
pub mod models;

pub use actions::*;
pub use data::{FlatPayload, UpdateStatusPayload};
pub use errors::FlatError;
pub use models::{Flat, FlatStatus, FlatVisibility, NewFlat};
