//! Inbound payloads for the house domain.

use serde::Deserialize;

use super::models::NewHouse;
use crate::common::{ValidationError, Validator};

/// Create-house request.
#[derive(Debug, Clone, Deserialize)]
pub struct HousePayload {
    pub address: String,
    pub year: i32,
    #[serde(default)]
    pub developer: Option<String>,
}

impl HousePayload {
    pub fn validate(&self, validator: &Validator) -> Result<NewHouse, ValidationError> {
        Ok(NewHouse {
            address: validator.required_text("address", &self.address)?,
            year: validator.non_negative("year", self.year)?,
            developer: validator.optional_text("developer", self.developer.as_deref())?,
        })
    }
}

/// Subscribe request.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribePayload {
    pub email: String,
}

impl SubscribePayload {
    pub fn validate(&self, validator: &Validator) -> Result<String, ValidationError> {
        validator.email("email", &self.email)
    }
}
