use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{HouseId, SubscriptionId};

/// Subscription model - append-only, duplicates tolerated
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub house_id: HouseId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Append a subscription. The house is not checked for existence.
    pub async fn insert(house_id: HouseId, email: &str, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO subscription (house_id, email, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, house_id, email, created_at
            "#,
        )
        .bind(house_id)
        .bind(email)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_house(house_id: HouseId, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, house_id, email, created_at FROM subscription WHERE house_id = $1 ORDER BY created_at",
        )
        .bind(house_id)
        .fetch_all(pool)
        .await
    }
}
