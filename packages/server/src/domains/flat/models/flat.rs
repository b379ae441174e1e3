use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use typed_builder::TypedBuilder;

use super::FlatStatus;
use crate::common::{FlatId, HouseId, Role, UserId};

/// Flat model - SQL persistence layer
///
/// A flat always belongs to exactly one house. `moderator_id` is set by the
/// first moderator to take the flat under review and never changes after.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flat {
    pub id: FlatId,
    pub house_id: HouseId,
    pub price: i32,
    pub rooms: i32,
    pub status: FlatStatus,
    pub moderator_id: Option<UserId>,
}

/// Validated input for a new flat. There is no status field: every flat
/// starts as `created`.
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewFlat {
    pub house_id: HouseId,
    pub price: i32,
    pub rooms: i32,
}

/// The columns read under the row lock.
#[derive(sqlx::FromRow, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedFlat {
    pub id: FlatId,
    pub status: FlatStatus,
    pub moderator_id: Option<UserId>,
}

/// Which flats of a house a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatVisibility {
    /// Every flat regardless of status (moderators).
    All,
    /// Only `approved` flats (everyone else).
    ApprovedOnly,
}

impl FlatVisibility {
    pub fn for_role(role: Role) -> Self {
        if role.is_moderator() {
            FlatVisibility::All
        } else {
            FlatVisibility::ApprovedOnly
        }
    }
}

impl Flat {
    /// Find flat by ID
    pub async fn find_by_id(id: FlatId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, house_id, price, rooms, status, moderator_id FROM flat WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Flats of a house, filtered by visibility. No rows is an empty vec.
    pub async fn find_by_house(
        house_id: HouseId,
        visibility: FlatVisibility,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        match visibility {
            FlatVisibility::All => {
                sqlx::query_as::<_, Self>(
                    r#"
                    SELECT id, house_id, price, rooms, status, moderator_id
                    FROM flat
                    WHERE house_id = $1
                    ORDER BY id
                    "#,
                )
                .bind(house_id)
                .fetch_all(pool)
                .await
            }
            FlatVisibility::ApprovedOnly => {
                sqlx::query_as::<_, Self>(
                    r#"
                    SELECT id, house_id, price, rooms, status, moderator_id
                    FROM flat
                    WHERE house_id = $1 AND status = $2
                    ORDER BY id
                    "#,
                )
                .bind(house_id)
                .bind(FlatStatus::Approved)
                .fetch_all(pool)
                .await
            }
        }
    }

    /// Insert a flat with status forced to `created`.
    pub async fn insert(new_flat: &NewFlat, conn: &mut PgConnection) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO flat (house_id, price, rooms, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, house_id, price, rooms, status, moderator_id
            "#,
        )
        .bind(new_flat.house_id)
        .bind(new_flat.price)
        .bind(new_flat.rooms)
        .bind(FlatStatus::Created)
        .fetch_one(conn)
        .await
    }

    /// Read status and moderator with `FOR UPDATE`.
    ///
    /// Blocks other lockers of the same row until the enclosing transaction
    /// ends; other flats are unaffected.
    pub async fn lock_for_update(
        id: FlatId,
        conn: &mut PgConnection,
    ) -> Result<Option<LockedFlat>, sqlx::Error> {
        sqlx::query_as::<_, LockedFlat>(
            r#"
            SELECT id, status, moderator_id
            FROM flat
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// `created` -> `on_moderation`, recording the moderator.
    pub async fn start_moderation(
        id: FlatId,
        moderator_id: UserId,
        conn: &mut PgConnection,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE flat SET status = $2, moderator_id = $3 WHERE id = $1")
            .bind(id)
            .bind(FlatStatus::OnModeration)
            .bind(moderator_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Write a resolved status (`approved` / `declined`).
    pub async fn set_status(
        id: FlatId,
        status: FlatStatus,
        conn: &mut PgConnection,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE flat SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }
}
