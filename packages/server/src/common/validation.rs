//! Input validation shared by the house and flat domains.
//!
//! `Validator` is stateless and constructed explicitly; it is carried in
//! `ServerDeps` and handed to the domain actions rather than living in a global.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Email pattern - RFC 5322 simplified
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
}

/// Malformed or missing input. Caller's fault, surfaced verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field validation for '{field}' failed: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Required free text; surrounding whitespace is trimmed.
    pub fn required_text(&self, field: &'static str, value: &str) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(field, "cannot be empty"));
        }
        Ok(trimmed.to_string())
    }

    /// Optional free text. Absent or empty means "not given"; whitespace-only
    /// is rejected.
    pub fn optional_text(
        &self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<Option<String>, ValidationError> {
        match value {
            None | Some("") => Ok(None),
            Some(v) => self.required_text(field, v).map(Some),
        }
    }

    pub fn non_negative(&self, field: &'static str, value: i32) -> Result<i32, ValidationError> {
        if value < 0 {
            return Err(ValidationError::new(field, "must be more or equal than 0"));
        }
        Ok(value)
    }

    pub fn positive(&self, field: &'static str, value: i32) -> Result<i32, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::new(field, "must be greater than 0"));
        }
        Ok(value)
    }

    pub fn email(&self, field: &'static str, value: &str) -> Result<String, ValidationError> {
        let email = self.required_text(field, value)?;
        if !EMAIL_REGEX.is_match(&email) {
            return Err(ValidationError::new(field, "must be a valid email address"));
        }
        Ok(email)
    }
}
