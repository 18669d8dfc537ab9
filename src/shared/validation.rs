use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Canonical UUID v4 text form: 8-4-4-4-12 hex groups, version nibble 4,
    /// variant nibble one of 8, 9, a, b.
    /// - Valid: "3b241101-e2bb-4255-8caf-4136c566a962"
    /// - Invalid: "not-a-uuid", "3b241101-e2bb-1255-8caf-4136c566a962" (v1)
    pub static ref UUID_V4_REGEX: Regex =
        Regex::new(r"^[a-f\d]{8}-[a-f\d]{4}-4[a-f\d]{3}-[89aAbB][a-f\d]{3}-[a-f\d]{12}$").unwrap();
}

pub fn is_uuid_v4(value: &str) -> bool {
    UUID_V4_REGEX.is_match(value)
}

/// Parse a path identifier, rejecting anything that is not a UUID v4.
pub fn parse_uuid_v4(value: &str, what: &str) -> Result<Uuid> {
    if !is_uuid_v4(value) {
        return Err(AppError::BadRequest(format!("Invalid {} id", what)));
    }

    Uuid::parse_str(value).map_err(|_| AppError::BadRequest(format!("Invalid {} id", what)))
}
