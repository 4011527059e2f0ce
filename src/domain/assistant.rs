use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Channel an assistant variant answers on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssistantChannel {
    #[default]
    Chat,
    Email,
}

impl AssistantChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for AssistantChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistantChannel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "email" => Ok(Self::Email),
            other => Err(format!("unknown assistant channel `{other}`")),
        }
    }
}

/// Tool functions an assistant variant is allowed to call.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssistantCapabilities {
    #[serde(default)]
    pub check_availability: bool,
    #[serde(default)]
    pub get_product_locations: bool,
    #[serde(default)]
    pub get_product_list: bool,
    #[serde(default)]
    pub set_appointment: bool,
    #[serde(default)]
    pub get_product_photos: bool,
    #[serde(default)]
    pub handoff_to_admin: bool,
}

impl AssistantCapabilities {
    /// Every capability switched on.
    pub fn all() -> Self {
        Self {
            check_availability: true,
            get_product_locations: true,
            get_product_list: true,
            set_appointment: true,
            get_product_photos: true,
            handoff_to_admin: true,
        }
    }

    /// Names of the enabled tool functions, in a stable order.
    pub fn enabled_functions(&self) -> Vec<&'static str> {
        [
            (self.check_availability, "check_availability"),
            (self.get_product_locations, "get_product_locations"),
            (self.get_product_list, "get_product_list"),
            (self.set_appointment, "set_appointment"),
            (self.get_product_photos, "get_product_photos"),
            (self.handoff_to_admin, "handoff_to_admin"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }
}

/// A configured conversational agent variant of a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assistant {
    /// Unique identifier of the assistant configuration.
    pub id: i32,
    /// Owning business identifier.
    pub business_id: i32,
    /// Identifier of the assistant at the model provider.
    pub external_id: String,
    /// Channel the variant answers on.
    pub channel: AssistantChannel,
    /// First message sent when a conversation opens.
    pub start_message: String,
    /// System instructions.
    pub instructions: String,
    /// Additional knowledge appended to the instructions.
    pub context: String,
    /// Model identifier used for completions.
    pub model: String,
    /// Tool functions the assistant may call.
    pub capabilities: AssistantCapabilities,
    pub created_at: NaiveDateTime,
}

/// Payload required to register an assistant variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssistant {
    pub business_id: i32,
    pub external_id: String,
    pub channel: AssistantChannel,
    pub start_message: String,
    pub instructions: String,
    pub context: String,
    pub model: String,
    pub capabilities: AssistantCapabilities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_functions_lists_only_switched_on_tools() {
        let capabilities = AssistantCapabilities {
            check_availability: true,
            get_product_photos: true,
            ..AssistantCapabilities::default()
        };

        assert_eq!(
            capabilities.enabled_functions(),
            vec!["check_availability", "get_product_photos"]
        );
        assert!(
            AssistantCapabilities::default()
                .enabled_functions()
                .is_empty()
        );
        assert_eq!(AssistantCapabilities::all().enabled_functions().len(), 6);
    }

    #[test]
    fn channel_round_trips_through_text() {
        assert_eq!("Email".parse::<AssistantChannel>(), Ok(AssistantChannel::Email));
        assert_eq!(AssistantChannel::Chat.to_string(), "chat");
        assert!("sms".parse::<AssistantChannel>().is_err());
    }
}
