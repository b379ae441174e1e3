// Rental listings API - Core
//
// Houses, the flats inside them, and the moderation workflow that decides
// which flats are publicly visible. The flat lifecycle engine lives in
// domains/flat; HTTP wiring lives in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
