pub mod flat;
pub mod status;

pub use flat::{Flat, FlatVisibility, LockedFlat, NewFlat};
pub use status::{FlatStatus, UnknownFlatStatus};
