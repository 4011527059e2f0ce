use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A sample image illustrating one or more products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    pub id: i32,
    pub business_id: i32,
    /// Path or object key of the stored image.
    pub file_ref: String,
    /// Caption describing the image.
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub business_id: i32,
    pub file_ref: String,
    pub description: String,
}

impl NewPhoto {
    pub fn new(
        business_id: i32,
        file_ref: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            business_id,
            file_ref: file_ref.into(),
            description: description.into(),
        }
    }
}
