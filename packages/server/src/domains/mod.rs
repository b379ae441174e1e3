// Business domains
pub mod auth;
pub mod flat;
pub mod house;
