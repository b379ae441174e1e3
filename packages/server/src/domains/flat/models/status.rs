use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

/// Moderation status of a flat.
///
/// Persisted as text. `on_moderation` is the only spelling ever written;
/// the legacy `"on moderation"` / `"on moderate"` forms are accepted on input
/// and normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlatStatus {
    #[default]
    Created,
    #[serde(alias = "on moderation", alias = "on moderate")]
    OnModeration,
    Approved,
    Declined,
}

impl FlatStatus {
    pub const ALL: [FlatStatus; 4] = [
        FlatStatus::Created,
        FlatStatus::OnModeration,
        FlatStatus::Approved,
        FlatStatus::Declined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlatStatus::Created => "created",
            FlatStatus::OnModeration => "on_moderation",
            FlatStatus::Approved => "approved",
            FlatStatus::Declined => "declined",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlatStatus::Approved | FlatStatus::Declined)
    }
}

impl fmt::Display for FlatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid status {0}")]
pub struct UnknownFlatStatus(pub String);

impl FromStr for FlatStatus {
    type Err = UnknownFlatStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(FlatStatus::Created),
            "on_moderation" | "on moderation" | "on moderate" => Ok(FlatStatus::OnModeration),
            "approved" => Ok(FlatStatus::Approved),
            "declined" => Ok(FlatStatus::Declined),
            other => Err(UnknownFlatStatus(other.to_string())),
        }
    }
}

// ============================================================================
// sqlx support (TEXT column)
// ============================================================================

impl Type<Postgres> for FlatStatus {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for FlatStatus {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl Decode<'_, Postgres> for FlatStatus {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        let raw = <&str as Decode<Postgres>>::decode(value)?;
        Ok(raw.parse::<FlatStatus>()?)
    }
}
