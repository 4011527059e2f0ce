use serde::Serialize;

use crate::domain::assistant::Assistant;
use crate::domain::business::Business;
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::businesses::{AddAssistantForm, AddBusinessForm};
use crate::repository::{
    AssistantReader, AssistantWriter, BusinessReader, BusinessWriter, ProductReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Assistant configuration together with the tool functions it may call.
#[derive(Debug, Serialize)]
pub struct AssistantView {
    #[serde(flatten)]
    pub assistant: Assistant,
    pub functions: Vec<&'static str>,
}

impl From<Assistant> for AssistantView {
    fn from(assistant: Assistant) -> Self {
        let functions = assistant.capabilities.enabled_functions();
        Self {
            assistant,
            functions,
        }
    }
}

/// Catalog answer given to an assistant asking for its business's products.
#[derive(Debug, Serialize)]
pub struct AssistantProducts {
    pub business_id: i32,
    pub products: Vec<Product>,
}

/// Fetch a business or fail with `NotFound`.
pub fn get_business<R>(repo: &R, business_id: i32) -> ServiceResult<Business>
where
    R: BusinessReader + ?Sized,
{
    repo.get_business_by_id(business_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_businesses<R>(repo: &R) -> ServiceResult<Vec<Business>>
where
    R: BusinessReader + ?Sized,
{
    repo.list_businesses().map_err(ServiceError::from)
}

pub fn create_business<R>(repo: &R, form: AddBusinessForm) -> ServiceResult<Business>
where
    R: BusinessWriter + ?Sized,
{
    let new_business = form
        .into_new_business()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let business = repo
        .create_business(&new_business)
        .map_err(ServiceError::from)?;
    log::info!("Registered business {} ({})", business.id, business.name);
    Ok(business)
}

pub fn list_assistants<R>(repo: &R, business_id: i32) -> ServiceResult<Vec<AssistantView>>
where
    R: BusinessReader + AssistantReader + ?Sized,
{
    get_business(repo, business_id)?;
    let assistants = repo
        .list_assistants(business_id)
        .map_err(ServiceError::from)?;
    Ok(assistants.into_iter().map(AssistantView::from).collect())
}

pub fn create_assistant<R>(
    repo: &R,
    business_id: i32,
    form: AddAssistantForm,
) -> ServiceResult<AssistantView>
where
    R: BusinessReader + AssistantWriter + ?Sized,
{
    get_business(repo, business_id)?;
    let new_assistant = form
        .into_new_assistant(business_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let assistant = repo
        .create_assistant(&new_assistant)
        .map_err(ServiceError::from)?;
    Ok(assistant.into())
}

/// List every product of the business an assistant belongs to.
///
/// Assistants without the product list capability are treated as unknown.
pub fn list_assistant_products<R>(repo: &R, external_id: &str) -> ServiceResult<AssistantProducts>
where
    R: AssistantReader + ProductReader + ?Sized,
{
    let assistant = repo
        .get_assistant_by_external_id(external_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if !assistant.capabilities.get_product_list {
        return Err(ServiceError::NotFound);
    }

    let (_, products) = repo
        .list_products(ProductListQuery::new(assistant.business_id))
        .map_err(ServiceError::from)?;

    Ok(AssistantProducts {
        business_id: assistant.business_id,
        products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::assistant::{AssistantCapabilities, AssistantChannel};
    use crate::repository::RepositoryResult;
    use crate::repository::mock::{
        MockAssistantReader, MockBusinessReader, MockBusinessWriter, MockProductReader,
    };

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_assistant(capabilities: AssistantCapabilities) -> Assistant {
        Assistant {
            id: 1,
            business_id: 7,
            external_id: "asst_1".to_string(),
            channel: AssistantChannel::Chat,
            start_message: "Hello".to_string(),
            instructions: "Be brief".to_string(),
            context: String::new(),
            model: "gpt-4o".to_string(),
            capabilities,
            created_at: datetime(),
        }
    }

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            business_id: 7,
            duration_minutes: 60,
            description: format!("Session {id}"),
            booking_fee_cents: 0,
            created_at: datetime(),
        }
    }

    struct FakeRepo {
        assistant_reader: MockAssistantReader,
        product_reader: MockProductReader,
    }

    impl AssistantReader for FakeRepo {
        fn get_assistant_by_external_id(
            &self,
            external_id: &str,
        ) -> RepositoryResult<Option<Assistant>> {
            self.assistant_reader.get_assistant_by_external_id(external_id)
        }

        fn list_assistants(&self, business_id: i32) -> RepositoryResult<Vec<Assistant>> {
            self.assistant_reader.list_assistants(business_id)
        }
    }

    impl ProductReader for FakeRepo {
        fn get_product_by_id(&self, id: i32, business_id: i32) -> RepositoryResult<Option<Product>> {
            self.product_reader.get_product_by_id(id, business_id)
        }

        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
            self.product_reader.list_products(query)
        }
    }

    #[test]
    fn get_business_maps_missing_row_to_not_found() {
        let mut repo = MockBusinessReader::new();
        repo.expect_get_business_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_business(&repo, 3);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_business_rejects_invalid_form_without_touching_storage() {
        let mut repo = MockBusinessWriter::new();
        repo.expect_create_business().never();

        let form = AddBusinessForm {
            name: String::new(),
            calendar_service: "google".to_string(),
            calendar_service_id: "svc".to_string(),
            knowledge_base_ref: None,
        };

        assert!(matches!(
            create_business(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn assistant_products_lists_business_catalog() {
        let mut repo = FakeRepo {
            assistant_reader: MockAssistantReader::new(),
            product_reader: MockProductReader::new(),
        };
        repo.assistant_reader
            .expect_get_assistant_by_external_id()
            .withf(|external_id| external_id.to_string() == "asst_1")
            .times(1)
            .returning(|_| Ok(Some(sample_assistant(AssistantCapabilities::all()))));
        repo.product_reader
            .expect_list_products()
            .withf(|query| query.business_id == 7 && query.pagination.is_none())
            .times(1)
            .returning(|_| Ok((2, vec![sample_product(1), sample_product(2)])));

        let result = list_assistant_products(&repo, "asst_1").expect("expected success");

        assert_eq!(result.business_id, 7);
        assert_eq!(result.products.len(), 2);
    }

    #[test]
    fn assistant_products_requires_capability() {
        let mut repo = FakeRepo {
            assistant_reader: MockAssistantReader::new(),
            product_reader: MockProductReader::new(),
        };
        repo.assistant_reader
            .expect_get_assistant_by_external_id()
            .returning(|_| Ok(Some(sample_assistant(AssistantCapabilities::default()))));
        repo.product_reader.expect_list_products().never();

        assert!(matches!(
            list_assistant_products(&repo, "asst_1"),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn assistant_view_exposes_enabled_functions() {
        let view = AssistantView::from(sample_assistant(AssistantCapabilities {
            set_appointment: true,
            ..AssistantCapabilities::default()
        }));

        assert_eq!(view.functions, vec!["set_appointment"]);
        let json = serde_json::to_value(&view).expect("serialization");
        assert_eq!(json["external_id"], "asst_1");
        assert_eq!(json["functions"][0], "set_appointment");
    }
}
