use actix_web::{HttpResponse, Responder, get, web};

use crate::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::availability::{
    AvailabilityQuery, load_associate_availability, load_product_availability,
};
use crate::services::eligibility::product_eligibility;

#[get("/businesses/{business_id}/products/{product_id}/eligibility")]
/// Associate/location pairs that can fulfil the product.
pub async fn show_product_eligibility(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (business_id, product_id) = path.into_inner();
    match product_eligibility(repo.get_ref(), business_id, product_id) {
        Ok(pairs) => HttpResponse::Ok().json(pairs),
        Err(err) => service_error_response(err, "resolve product eligibility"),
    }
}

#[get("/businesses/{business_id}/products/{product_id}/availability")]
/// Bookable slots of the product, appointments already subtracted.
pub async fn show_product_availability(
    path: web::Path<(i32, i32)>,
    params: web::Query<AvailabilityQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let (business_id, product_id) = path.into_inner();
    match load_product_availability(
        repo.get_ref(),
        business_id,
        product_id,
        params.into_inner(),
        config.day_of_week,
    ) {
        Ok(availability) => HttpResponse::Ok().json(availability),
        Err(err) => service_error_response(err, "resolve product availability"),
    }
}

#[get("/businesses/{business_id}/associates/{associate_id}/availability")]
/// Windows derived from the associate's schedules alone.
pub async fn show_associate_availability(
    path: web::Path<(i32, i32)>,
    params: web::Query<AvailabilityQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let (business_id, associate_id) = path.into_inner();
    match load_associate_availability(
        repo.get_ref(),
        business_id,
        associate_id,
        params.into_inner(),
        config.day_of_week,
    ) {
        Ok(windows) => HttpResponse::Ok().json(windows),
        Err(err) => service_error_response(err, "resolve associate availability"),
    }
}
