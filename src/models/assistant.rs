use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::assistant::{
    Assistant as DomainAssistant, AssistantCapabilities, AssistantChannel,
    NewAssistant as DomainNewAssistant,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::assistants)]
#[diesel(belongs_to(super::business::Business, foreign_key = business_id))]
pub struct Assistant {
    pub id: i32,
    pub business_id: i32,
    pub external_id: String,
    pub channel: String,
    pub start_message: String,
    pub instructions: String,
    pub context: String,
    pub model: String,
    pub uses_check_availability: bool,
    pub uses_get_product_locations: bool,
    pub uses_get_product_list: bool,
    pub uses_set_appointment: bool,
    pub uses_get_product_photos: bool,
    pub uses_handoff_to_admin: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::assistants)]
pub struct NewAssistant<'a> {
    pub business_id: i32,
    pub external_id: &'a str,
    pub channel: &'a str,
    pub start_message: &'a str,
    pub instructions: &'a str,
    pub context: &'a str,
    pub model: &'a str,
    pub uses_check_availability: bool,
    pub uses_get_product_locations: bool,
    pub uses_get_product_list: bool,
    pub uses_set_appointment: bool,
    pub uses_get_product_photos: bool,
    pub uses_handoff_to_admin: bool,
}

impl From<Assistant> for DomainAssistant {
    fn from(value: Assistant) -> Self {
        // The column is CHECK-constrained to known channels.
        let channel = value.channel.parse().unwrap_or_default();
        Self {
            id: value.id,
            business_id: value.business_id,
            external_id: value.external_id,
            channel,
            start_message: value.start_message,
            instructions: value.instructions,
            context: value.context,
            model: value.model,
            capabilities: AssistantCapabilities {
                check_availability: value.uses_check_availability,
                get_product_locations: value.uses_get_product_locations,
                get_product_list: value.uses_get_product_list,
                set_appointment: value.uses_set_appointment,
                get_product_photos: value.uses_get_product_photos,
                handoff_to_admin: value.uses_handoff_to_admin,
            },
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewAssistant> for NewAssistant<'a> {
    fn from(value: &'a DomainNewAssistant) -> Self {
        let capabilities = &value.capabilities;
        Self {
            business_id: value.business_id,
            external_id: value.external_id.as_str(),
            channel: AssistantChannel::as_str(value.channel),
            start_message: value.start_message.as_str(),
            instructions: value.instructions.as_str(),
            context: value.context.as_str(),
            model: value.model.as_str(),
            uses_check_availability: capabilities.check_availability,
            uses_get_product_locations: capabilities.get_product_locations,
            uses_get_product_list: capabilities.get_product_list,
            uses_set_appointment: capabilities.set_appointment,
            uses_get_product_photos: capabilities.get_product_photos,
            uses_handoff_to_admin: capabilities.handoff_to_admin,
        }
    }
}
