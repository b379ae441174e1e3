use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use typed_builder::TypedBuilder;

use crate::common::HouseId;

/// House model - SQL persistence layer
///
/// Never deleted. After creation only `updated_at` moves, and only forward.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub address: String,
    pub year: i32,
    pub developer: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for a new house.
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewHouse {
    #[builder(setter(into))]
    pub address: String,
    pub year: i32,
    #[builder(default, setter(strip_option, into))]
    pub developer: Option<String>,
}

impl House {
    /// Insert new house. Both timestamps are the transaction start time.
    pub async fn insert(new_house: &NewHouse, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO house (address, year, developer, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, address, year, developer, created_at, updated_at
            "#,
        )
        .bind(&new_house.address)
        .bind(new_house.year)
        .bind(&new_house.developer)
        .fetch_one(pool)
        .await
    }

    /// Find house by ID
    pub async fn find_by_id(id: HouseId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, address, year, developer, created_at, updated_at FROM house WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Advance `updated_at` after a change to one of the house's flats.
    ///
    /// Plain write, no lock: last writer wins. `GREATEST` keeps the column
    /// from moving backwards when a transaction that started earlier commits
    /// later.
    pub async fn touch(id: HouseId, conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE house SET updated_at = GREATEST(updated_at, clock_timestamp()) WHERE id = $1",
        )
        .bind(id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }
}
