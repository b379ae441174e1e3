pub mod house;
pub mod subscription;

pub use house::{House, NewHouse};
pub use subscription::Subscription;
