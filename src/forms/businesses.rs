use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::assistant::{AssistantCapabilities, AssistantChannel, NewAssistant};
use crate::domain::business::NewBusiness;
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const NAME_MAX_LEN: u64 = 128;
const REFERENCE_MAX_LEN: u64 = 255;

/// Result type returned by the business form helpers.
pub type BusinessFormResult<T> = Result<T, BusinessFormError>;

/// Errors that can occur while processing business and assistant forms.
#[derive(Debug, Error)]
pub enum BusinessFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("`{field}` cannot be empty")]
    EmptyField { field: &'static str },
    #[error("{0}")]
    InvalidChannel(String),
}

/// JSON payload used to register a business.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBusinessForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Calendar provider name, for example `google`.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub calendar_service: String,
    #[validate(length(min = 1, max = REFERENCE_MAX_LEN))]
    pub calendar_service_id: String,
    #[validate(length(max = REFERENCE_MAX_LEN))]
    pub knowledge_base_ref: Option<String>,
}

impl AddBusinessForm {
    pub fn into_new_business(self) -> BusinessFormResult<NewBusiness> {
        self.validate()?;

        let name = non_empty("name", sanitize_inline_text(&self.name))?;
        let calendar_service = non_empty(
            "calendar_service",
            sanitize_inline_text(&self.calendar_service),
        )?;
        let calendar_service_id = non_empty(
            "calendar_service_id",
            self.calendar_service_id.trim().to_string(),
        )?;

        let mut business = NewBusiness::new(name, calendar_service, calendar_service_id);
        if let Some(reference) = self
            .knowledge_base_ref
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            business = business.with_knowledge_base_ref(reference);
        }

        Ok(business)
    }
}

/// JSON payload used to register an assistant variant of a business.
#[derive(Debug, Deserialize, Validate)]
pub struct AddAssistantForm {
    #[validate(length(min = 1, max = REFERENCE_MAX_LEN))]
    pub external_id: String,
    /// `chat` when omitted.
    pub channel: Option<String>,
    #[validate(length(min = 1))]
    pub start_message: String,
    #[validate(length(min = 1))]
    pub instructions: String,
    #[serde(default)]
    pub context: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub model: String,
    #[serde(default)]
    pub capabilities: AssistantCapabilities,
}

impl AddAssistantForm {
    pub fn into_new_assistant(self, business_id: i32) -> BusinessFormResult<NewAssistant> {
        self.validate()?;

        let channel = match self.channel.as_deref() {
            Some(value) => value
                .parse::<AssistantChannel>()
                .map_err(BusinessFormError::InvalidChannel)?,
            None => AssistantChannel::default(),
        };

        Ok(NewAssistant {
            business_id,
            external_id: non_empty("external_id", self.external_id.trim().to_string())?,
            channel,
            start_message: non_empty("start_message", sanitize_multiline_text(&self.start_message))?,
            instructions: non_empty("instructions", sanitize_multiline_text(&self.instructions))?,
            context: sanitize_multiline_text(&self.context),
            model: non_empty("model", self.model.trim().to_string())?,
            capabilities: self.capabilities,
        })
    }
}

fn non_empty(field: &'static str, value: String) -> BusinessFormResult<String> {
    if value.is_empty() {
        Err(BusinessFormError::EmptyField { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant_form() -> AddAssistantForm {
        AddAssistantForm {
            external_id: " asst_123 ".to_string(),
            channel: None,
            start_message: "Hi! How can I help?".to_string(),
            instructions: "Answer questions about   sessions.".to_string(),
            context: String::new(),
            model: "gpt-4o".to_string(),
            capabilities: AssistantCapabilities {
                check_availability: true,
                ..AssistantCapabilities::default()
            },
        }
    }

    #[test]
    fn add_business_form_sanitizes_fields() {
        let form = AddBusinessForm {
            name: "  Bright   Light Studio ".to_string(),
            calendar_service: "google".to_string(),
            calendar_service_id: " svc-1 ".to_string(),
            knowledge_base_ref: Some("   ".to_string()),
        };

        let business = form.into_new_business().expect("expected success");

        assert_eq!(business.name, "Bright Light Studio");
        assert_eq!(business.calendar_service_id, "svc-1");
        assert_eq!(business.knowledge_base_ref, None);
    }

    #[test]
    fn add_business_form_rejects_blank_name() {
        let form = AddBusinessForm {
            name: "   ".to_string(),
            calendar_service: "google".to_string(),
            calendar_service_id: "svc-1".to_string(),
            knowledge_base_ref: None,
        };

        let result = form.into_new_business();

        assert!(matches!(
            result,
            Err(BusinessFormError::EmptyField { field: "name" })
        ));
    }

    #[test]
    fn add_assistant_form_defaults_to_chat() {
        let assistant = assistant_form()
            .into_new_assistant(3)
            .expect("expected success");

        assert_eq!(assistant.business_id, 3);
        assert_eq!(assistant.external_id, "asst_123");
        assert_eq!(assistant.channel, AssistantChannel::Chat);
        assert_eq!(assistant.instructions, "Answer questions about sessions.");
        assert!(assistant.capabilities.check_availability);
    }

    #[test]
    fn add_assistant_form_rejects_unknown_channel() {
        let form = AddAssistantForm {
            channel: Some("fax".to_string()),
            ..assistant_form()
        };

        let result = form.into_new_assistant(3);

        assert!(matches!(result, Err(BusinessFormError::InvalidChannel(_))));
    }
}
