use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a bookable session package.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Owning business identifier.
    pub business_id: i32,
    /// Length of one session in minutes.
    pub duration_minutes: i32,
    /// Description shown to customers.
    pub description: String,
    /// Booking fee represented in the smallest currency unit (for example cents).
    pub booking_fee_cents: i64,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new product for a business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Owning business identifier.
    pub business_id: i32,
    /// Length of one session in minutes.
    pub duration_minutes: i32,
    /// Description shown to customers.
    pub description: String,
    /// Booking fee represented in the smallest currency unit.
    pub booking_fee_cents: i64,
}

impl NewProduct {
    /// Build a new product payload without a booking fee.
    pub fn new(business_id: i32, duration_minutes: i32, description: impl Into<String>) -> Self {
        Self {
            business_id,
            duration_minutes,
            description: description.into(),
            booking_fee_cents: 0,
        }
    }

    /// Attach a booking fee to the product payload.
    pub fn with_booking_fee_cents(mut self, booking_fee_cents: i64) -> Self {
        self.booking_fee_cents = booking_fee_cents;
        self
    }
}

/// Query definition used to list products for a business.
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Owning business identifier.
    pub business_id: i32,
    /// Optional substring search over the description.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets all products belonging to `business_id`.
    pub fn new(business_id: i32) -> Self {
        Self {
            business_id,
            search: None,
            pagination: None,
        }
    }

    /// Filter the results by a search term applied to the description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
