//! List a house's flats, filtered by the caller's role

use tracing::{debug, error};

use crate::common::{HouseId, Role};
use crate::domains::flat::models::{Flat, FlatVisibility};
use crate::domains::house::errors::HouseError;
use crate::kernel::ServerDeps;

/// Moderators see every flat; everyone else sees `approved` flats only.
/// An unknown house or a house without visible flats yields an empty list.
pub async fn get_house_flats(
    house_id: HouseId,
    role: Role,
    deps: &ServerDeps,
) -> Result<Vec<Flat>, HouseError> {
    let visibility = FlatVisibility::for_role(role);

    let flats = Flat::find_by_house(house_id, visibility, &deps.db_pool)
        .await
        .inspect_err(|e| {
            error!(house_id = %house_id, role = %role, error = %e, "Failed to list house flats");
        })?;

    debug!(house_id = %house_id, role = %role, count = flats.len(), "Listed house flats");
    Ok(flats)
}
