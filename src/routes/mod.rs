use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod appointments;
pub mod availability;
pub mod businesses;
pub mod catalog;
pub mod schedules;

/// JSON body returned with every 4xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Register every `/v1` endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(businesses::list_businesses)
            .service(businesses::add_business)
            .service(businesses::show_business)
            .service(businesses::list_assistants)
            .service(businesses::add_assistant)
            .service(businesses::list_assistant_products)
            .service(catalog::list_associates)
            .service(catalog::add_associate)
            .service(catalog::list_locations)
            .service(catalog::add_location)
            .service(catalog::list_products)
            .service(catalog::add_product)
            .service(catalog::add_photo)
            .service(catalog::link_associate)
            .service(catalog::link_location)
            .service(catalog::link_photo)
            .service(catalog::list_product_locations)
            .service(catalog::list_product_photos)
            .service(availability::show_product_eligibility)
            .service(availability::show_product_availability)
            .service(availability::show_associate_availability)
            .service(schedules::add_schedule)
            .service(schedules::upload_schedules)
            .service(schedules::supersede_schedule)
            .service(schedules::list_associate_schedules)
            .service(appointments::list_appointments)
            .service(appointments::add_appointment),
    );
}

/// Translate a service failure into an HTTP response.
///
/// Only internal failures are logged; their details never reach the client.
pub(crate) fn service_error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("not found")),
        ServiceError::Conflict => {
            HttpResponse::Conflict().json(ErrorBody::new("record already exists"))
        }
        ServiceError::Form(message) => {
            HttpResponse::UnprocessableEntity().json(ErrorBody::new(message))
        }
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity().json(ErrorBody::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity().json(ErrorBody::new(err.to_string()));
    InternalError::from_response(err, response).into()
}
