//! Create house action

use tracing::{error, info};

use crate::domains::house::errors::HouseError;
use crate::domains::house::models::{House, NewHouse};
use crate::kernel::ServerDeps;

/// Insert a house; the returned row carries the generated id and timestamps.
pub async fn create_house(new_house: NewHouse, deps: &ServerDeps) -> Result<House, HouseError> {
    let house = House::insert(&new_house, &deps.db_pool)
        .await
        .inspect_err(|e| {
            error!(address = %new_house.address, error = %e, "Failed to insert house");
        })?;

    info!(house_id = %house.id, "House created");
    Ok(house)
}
