use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::associate::{InvalidTimezone, NewAssociate};
use crate::domain::location::NewLocation;
use crate::domain::photo::NewPhoto;
use crate::domain::product::NewProduct;
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const REFERENCE_MAX_LEN: u64 = 255;
/// Longest session a product may describe (one day).
const DURATION_MAX_MINUTES: i32 = 24 * 60;

/// Result type returned by the catalog form helpers.
pub type CatalogFormResult<T> = Result<T, CatalogFormError>;

/// Errors that can occur while processing catalog forms.
#[derive(Debug, Error)]
pub enum CatalogFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("`{field}` cannot be empty")]
    EmptyField { field: &'static str },
    #[error(transparent)]
    Timezone(#[from] InvalidTimezone),
}

/// JSON payload used to register an associate.
#[derive(Debug, Deserialize, Validate)]
pub struct AddAssociateForm {
    #[validate(length(min = 1, max = REFERENCE_MAX_LEN))]
    pub calendar_id: String,
    /// IANA timezone name, for example `America/New_York`.
    #[validate(length(min = 1))]
    pub timezone: String,
}

impl AddAssociateForm {
    pub fn into_new_associate(self, business_id: i32) -> CatalogFormResult<NewAssociate> {
        self.validate()?;
        let calendar_id = non_empty("calendar_id", self.calendar_id.trim().to_string())?;
        Ok(NewAssociate::new(business_id, calendar_id, &self.timezone)?)
    }
}

/// JSON payload used to register a location.
#[derive(Debug, Deserialize, Validate)]
pub struct AddLocationForm {
    #[validate(length(min = 1))]
    pub description: String,
}

impl AddLocationForm {
    pub fn into_new_location(self, business_id: i32) -> CatalogFormResult<NewLocation> {
        self.validate()?;
        let description = non_empty("description", sanitize_multiline_text(&self.description))?;
        Ok(NewLocation::new(business_id, description))
    }
}

/// JSON payload used to create a product.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1, max = DURATION_MAX_MINUTES))]
    pub duration_minutes: i32,
    /// Booking fee in cents, zero when omitted.
    #[validate(range(min = 0))]
    pub booking_fee_cents: Option<i64>,
}

impl AddProductForm {
    pub fn into_new_product(self, business_id: i32) -> CatalogFormResult<NewProduct> {
        self.validate()?;
        let description = non_empty("description", sanitize_multiline_text(&self.description))?;
        let product = NewProduct::new(business_id, self.duration_minutes, description)
            .with_booking_fee_cents(self.booking_fee_cents.unwrap_or(0));
        Ok(product)
    }
}

/// JSON payload used to register a photo.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPhotoForm {
    /// Reference to the stored image (URL or storage key).
    #[validate(length(min = 1, max = REFERENCE_MAX_LEN))]
    pub file_ref: String,
    #[serde(default)]
    pub description: String,
}

impl AddPhotoForm {
    pub fn into_new_photo(self, business_id: i32) -> CatalogFormResult<NewPhoto> {
        self.validate()?;
        let file_ref = non_empty("file_ref", self.file_ref.trim().to_string())?;
        Ok(NewPhoto::new(
            business_id,
            file_ref,
            sanitize_inline_text(&self.description),
        ))
    }
}

/// JSON payload naming the record to attach to a product.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkProductForm {
    #[validate(range(min = 1))]
    pub id: i32,
}

fn non_empty(field: &'static str, value: String) -> CatalogFormResult<String> {
    if value.is_empty() {
        Err(CatalogFormError::EmptyField { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_associate_form_checks_timezone() {
        let form = AddAssociateForm {
            calendar_id: " anna@studio.example ".to_string(),
            timezone: "Europe/London".to_string(),
        };
        let associate = form.into_new_associate(4).expect("expected success");
        assert_eq!(associate.calendar_id, "anna@studio.example");
        assert_eq!(associate.timezone, "Europe/London");

        let form = AddAssociateForm {
            calendar_id: "anna@studio.example".to_string(),
            timezone: "Europe/Atlantis".to_string(),
        };
        assert!(matches!(
            form.into_new_associate(4),
            Err(CatalogFormError::Timezone(_))
        ));
    }

    #[test]
    fn add_product_form_defaults_fee_to_zero() {
        let form = AddProductForm {
            description: " Family  portrait ".to_string(),
            duration_minutes: 60,
            booking_fee_cents: None,
        };

        let product = form.into_new_product(2).expect("expected success");

        assert_eq!(product.description, "Family portrait");
        assert_eq!(product.duration_minutes, 60);
        assert_eq!(product.booking_fee_cents, 0);
    }

    #[test]
    fn add_product_form_rejects_non_positive_duration() {
        let form = AddProductForm {
            description: "Headshots".to_string(),
            duration_minutes: 0,
            booking_fee_cents: Some(2500),
        };

        assert!(matches!(
            form.into_new_product(2),
            Err(CatalogFormError::Validation(_))
        ));
    }

    #[test]
    fn add_product_form_rejects_negative_fee() {
        let form = AddProductForm {
            description: "Headshots".to_string(),
            duration_minutes: 30,
            booking_fee_cents: Some(-1),
        };

        assert!(matches!(
            form.into_new_product(2),
            Err(CatalogFormError::Validation(_))
        ));
    }

    #[test]
    fn add_location_form_rejects_blank_description() {
        let form = AddLocationForm {
            description: " \n ".to_string(),
        };

        assert!(matches!(
            form.into_new_location(2),
            Err(CatalogFormError::EmptyField {
                field: "description"
            })
        ));
    }
}
