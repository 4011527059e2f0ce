use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::forms::schedules::{AddScheduleForm, SupersedeScheduleForm, UploadSchedulesForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::schedules;

#[derive(Serialize)]
struct ImportSummary {
    created: usize,
}

#[post("/businesses/{business_id}/schedules")]
pub async fn add_schedule(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddScheduleForm>,
) -> impl Responder {
    match schedules::create_schedule(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(schedule) => HttpResponse::Created().json(schedule),
        Err(err) => service_error_response(err, "create schedule"),
    }
}

#[post("/businesses/{business_id}/schedules/upload")]
/// Bulk import from a CSV request body; all rows are stored or none.
pub async fn upload_schedules(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    let form = UploadSchedulesForm::new(body.to_vec());
    match schedules::import_schedules(repo.get_ref(), path.into_inner(), form) {
        Ok(created) => HttpResponse::Created().json(ImportSummary { created }),
        Err(err) => service_error_response(err, "import schedules"),
    }
}

#[post("/businesses/{business_id}/schedules/{schedule_id}/supersede")]
pub async fn supersede_schedule(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<SupersedeScheduleForm>,
) -> impl Responder {
    let (business_id, schedule_id) = path.into_inner();
    match schedules::supersede_schedule(repo.get_ref(), business_id, schedule_id, form.into_inner())
    {
        Ok(schedule) => HttpResponse::Created().json(schedule),
        Err(err) => service_error_response(err, "supersede schedule"),
    }
}

#[get("/businesses/{business_id}/associates/{associate_id}/schedules")]
pub async fn list_associate_schedules(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (business_id, associate_id) = path.into_inner();
    match schedules::list_associate_schedules(repo.get_ref(), business_id, associate_id) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list schedules"),
    }
}
