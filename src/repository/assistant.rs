use diesel::prelude::*;

use crate::{
    domain::assistant::{Assistant as DomainAssistant, NewAssistant as DomainNewAssistant},
    models::assistant::{Assistant as DbAssistant, NewAssistant as DbNewAssistant},
    repository::{AssistantReader, AssistantWriter, DieselRepository, RepositoryResult},
};

impl AssistantReader for DieselRepository {
    fn get_assistant_by_external_id(
        &self,
        external_id: &str,
    ) -> RepositoryResult<Option<DomainAssistant>> {
        use crate::schema::assistants;

        let mut conn = self.conn()?;
        let assistant = assistants::table
            .filter(assistants::external_id.eq(external_id))
            .first::<DbAssistant>(&mut conn)
            .optional()?;

        Ok(assistant.map(Into::into))
    }

    fn list_assistants(&self, business_id: i32) -> RepositoryResult<Vec<DomainAssistant>> {
        use crate::schema::assistants;

        let mut conn = self.conn()?;
        let items = assistants::table
            .filter(assistants::business_id.eq(business_id))
            .order(assistants::external_id.asc())
            .load::<DbAssistant>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl AssistantWriter for DieselRepository {
    fn create_assistant(
        &self,
        new_assistant: &DomainNewAssistant,
    ) -> RepositoryResult<DomainAssistant> {
        use crate::schema::assistants;

        let mut conn = self.conn()?;
        let db_new = DbNewAssistant::from(new_assistant);
        let created = diesel::insert_into(assistants::table)
            .values(&db_new)
            .get_result::<DbAssistant>(&mut conn)?;

        Ok(created.into())
    }
}
