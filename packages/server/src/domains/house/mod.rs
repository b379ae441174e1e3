//! House domain - houses, their visible flats, and subscriptions

pub mod actions;
pub mod data;
pub mod errors;
pub mod models;

pub use actions::*;
pub use data::{HousePayload, SubscribePayload};
pub use errors::HouseError;
pub use models::{House, NewHouse, Subscription};
