//! Flat lifecycle actions

mod create_flat;
mod update_status;

pub use create_flat::create_flat;
pub use update_status::update_flat_status;
