//! Test fixtures for creating test data.
//!
//! These go through the domain actions, so fixture rows obey the same rules
//! as production rows.

use anyhow::Result;
use rent_core::common::{HouseId, UserId};
use rent_core::domains::flat::{create_flat, update_flat_status, Flat, FlatStatus, NewFlat};
use rent_core::domains::house::{create_house, House, NewHouse};
use rent_core::kernel::ServerDeps;

/// Create a test house built in 2020 by "Acme"
pub async fn create_test_house(deps: &ServerDeps, address: &str) -> Result<House> {
    let new_house = NewHouse::builder()
        .address(address)
        .year(2020)
        .developer("Acme".to_string())
        .build();

    Ok(create_house(new_house, deps).await?)
}

/// Create a flat in `created` status
pub async fn create_test_flat(deps: &ServerDeps, house_id: HouseId, price: i32) -> Result<Flat> {
    let new_flat = NewFlat::builder()
        .house_id(house_id)
        .price(price)
        .rooms(2)
        .build();

    Ok(create_flat(new_flat, deps).await?)
}

/// Create a flat and drive it to `status` with `moderator` doing the review
pub async fn create_flat_in_status(
    deps: &ServerDeps,
    house_id: HouseId,
    status: FlatStatus,
    moderator: UserId,
) -> Result<Flat> {
    let flat = create_test_flat(deps, house_id, 1000).await?;

    if status == FlatStatus::Created {
        return Ok(flat);
    }

    let flat = update_flat_status(moderator, flat.id, FlatStatus::OnModeration, deps).await?;
    if status == FlatStatus::OnModeration {
        return Ok(flat);
    }

    Ok(update_flat_status(moderator, flat.id, status, deps).await?)
}

/// Read a flat straight from the table, bypassing the domain models
pub async fn raw_flat_status(deps: &ServerDeps, flat: &Flat) -> Result<(String, Option<uuid::Uuid>)> {
    let row: (String, Option<uuid::Uuid>) =
        sqlx::query_as("SELECT status, moderator_id FROM flat WHERE id = $1")
            .bind(flat.id)
            .fetch_one(&deps.db_pool)
            .await?;
    Ok(row)
}
