use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A place, or a constraint on the place, where sessions happen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub id: i32,
    pub business_id: i32,
    /// Free-text description shown to customers.
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// Payload required to register a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocation {
    pub business_id: i32,
    pub description: String,
}

impl NewLocation {
    pub fn new(business_id: i32, description: impl Into<String>) -> Self {
        Self {
            business_id,
            description: description.into(),
        }
    }
}
