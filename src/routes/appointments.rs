use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::appointments::AddAppointmentForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::appointments;
use crate::services::availability::AvailabilityQuery;

#[get("/businesses/{business_id}/associates/{associate_id}/appointments")]
pub async fn list_appointments(
    path: web::Path<(i32, i32)>,
    params: web::Query<AvailabilityQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (business_id, associate_id) = path.into_inner();
    match appointments::list_appointments(
        repo.get_ref(),
        business_id,
        associate_id,
        params.into_inner(),
    ) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list appointments"),
    }
}

#[post("/businesses/{business_id}/associates/{associate_id}/appointments")]
pub async fn add_appointment(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddAppointmentForm>,
) -> impl Responder {
    let (business_id, associate_id) = path.into_inner();
    match appointments::create_appointment(
        repo.get_ref(),
        business_id,
        associate_id,
        form.into_inner(),
    ) {
        Ok(appointment) => HttpResponse::Created().json(appointment),
        Err(err) => service_error_response(err, "record appointment"),
    }
}
