//! Inbound payloads for the flat domain.

use serde::Deserialize;

use super::models::{FlatStatus, NewFlat};
use crate::common::{FlatId, HouseId, ValidationError, Validator};

/// Create-flat request. Any `status` the caller sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatPayload {
    pub house_id: HouseId,
    pub price: i32,
    pub rooms: i32,
}

impl FlatPayload {
    pub fn validate(&self, validator: &Validator) -> Result<NewFlat, ValidationError> {
        Ok(NewFlat::builder()
            .house_id(self.house_id)
            .price(validator.positive("price", self.price)?)
            .rooms(validator.positive("rooms", self.rooms)?)
            .build())
    }
}

/// Update-status request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusPayload {
    pub id: FlatId,
    pub status: String,
}

impl UpdateStatusPayload {
    pub fn desired_status(&self) -> Result<FlatStatus, ValidationError> {
        self.status
            .parse()
            .map_err(|e: super::models::UnknownFlatStatus| ValidationError::new("status", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_status_is_ignored() {
        let payload: FlatPayload = serde_json::from_value(serde_json::json!({
            "house_id": HouseId::new(),
            "price": 1000,
            "rooms": 2,
            "status": "approved",
        }))
        .unwrap();

        let new_flat = payload.validate(&Validator::new()).unwrap();
        assert_eq!(new_flat.price, 1000);
        assert_eq!(new_flat.rooms, 2);
    }

    #[test]
    fn test_non_positive_price_or_rooms_rejected() {
        let house_id = HouseId::new();
        let zero_price = FlatPayload { house_id, price: 0, rooms: 1 };
        assert_eq!(zero_price.validate(&Validator::new()).unwrap_err().field, "price");

        let negative_rooms = FlatPayload { house_id, price: 10, rooms: -1 };
        assert_eq!(negative_rooms.validate(&Validator::new()).unwrap_err().field, "rooms");
    }

    #[test]
    fn test_desired_status_parsing() {
        let payload = UpdateStatusPayload {
            id: FlatId::new(),
            status: "on moderation".to_string(),
        };
        assert_eq!(payload.desired_status().unwrap(), FlatStatus::OnModeration);

        let bogus = UpdateStatusPayload {
            id: FlatId::new(),
            status: "sold".to_string(),
        };
        let err = bogus.desired_status().unwrap_err();
        assert_eq!(err.field, "status");
        assert!(err.message.contains("sold"));
    }
}
