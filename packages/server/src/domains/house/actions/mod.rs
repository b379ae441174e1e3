//! House repository actions

mod create_house;
mod list_flats;
mod subscribe;

pub use create_house::create_house;
pub use list_flats::get_house_flats;
pub use subscribe::add_subscription;
