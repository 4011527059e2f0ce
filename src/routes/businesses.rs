use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::businesses::{AddAssistantForm, AddBusinessForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::businesses;

#[get("/businesses")]
pub async fn list_businesses(repo: web::Data<DieselRepository>) -> impl Responder {
    match businesses::list_businesses(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list businesses"),
    }
}

#[post("/businesses")]
pub async fn add_business(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddBusinessForm>,
) -> impl Responder {
    match businesses::create_business(repo.get_ref(), form.into_inner()) {
        Ok(business) => HttpResponse::Created().json(business),
        Err(err) => service_error_response(err, "create business"),
    }
}

#[get("/businesses/{business_id}")]
pub async fn show_business(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match businesses::get_business(repo.get_ref(), path.into_inner()) {
        Ok(business) => HttpResponse::Ok().json(business),
        Err(err) => service_error_response(err, "load business"),
    }
}

#[get("/businesses/{business_id}/assistants")]
pub async fn list_assistants(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match businesses::list_assistants(repo.get_ref(), path.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list assistants"),
    }
}

#[post("/businesses/{business_id}/assistants")]
pub async fn add_assistant(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddAssistantForm>,
) -> impl Responder {
    match businesses::create_assistant(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(assistant) => HttpResponse::Created().json(assistant),
        Err(err) => service_error_response(err, "create assistant"),
    }
}

#[get("/assistants/{external_id}/products")]
/// Product catalog of the business an assistant answers for.
pub async fn list_assistant_products(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match businesses::list_assistant_products(repo.get_ref(), &path.into_inner()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => service_error_response(err, "list assistant products"),
    }
}
