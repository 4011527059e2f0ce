use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A studio using the booking assistant. Every other record belongs to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Business {
    /// Unique identifier of the business.
    pub id: i32,
    /// Display name of the studio.
    pub name: String,
    /// Calendar provider used for the studio's bookings (for example `google`).
    pub calendar_service: String,
    /// Identifier of the studio's account at the calendar provider.
    pub calendar_service_id: String,
    /// Optional reference to an external knowledge base page.
    pub knowledge_base_ref: Option<String>,
    /// Timestamp for when the business record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to register a new business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBusiness {
    pub name: String,
    pub calendar_service: String,
    pub calendar_service_id: String,
    pub knowledge_base_ref: Option<String>,
}

impl NewBusiness {
    /// Build a business payload with a trimmed name.
    pub fn new(
        name: impl Into<String>,
        calendar_service: impl Into<String>,
        calendar_service_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            calendar_service: calendar_service.into(),
            calendar_service_id: calendar_service_id.into(),
            knowledge_base_ref: None,
        }
    }

    /// Attach an external knowledge base reference.
    pub fn with_knowledge_base_ref(mut self, reference: impl Into<String>) -> Self {
        self.knowledge_base_ref = Some(reference.into());
        self
    }
}
