// HTTP routes
pub mod flat;
pub mod health;
pub mod house;
pub mod login;

pub use flat::*;
pub use health::*;
pub use house::*;
pub use login::*;
