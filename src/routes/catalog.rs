use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::catalog::{
    AddAssociateForm, AddLocationForm, AddPhotoForm, AddProductForm, LinkProductForm,
};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::catalog::{self, LinkKind, ProductsQuery};

#[get("/businesses/{business_id}/associates")]
pub async fn list_associates(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog::list_associates(repo.get_ref(), path.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list associates"),
    }
}

#[post("/businesses/{business_id}/associates")]
pub async fn add_associate(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddAssociateForm>,
) -> impl Responder {
    match catalog::create_associate(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(associate) => HttpResponse::Created().json(associate),
        Err(err) => service_error_response(err, "create associate"),
    }
}

#[get("/businesses/{business_id}/locations")]
pub async fn list_locations(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog::list_locations(repo.get_ref(), path.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list locations"),
    }
}

#[post("/businesses/{business_id}/locations")]
pub async fn add_location(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddLocationForm>,
) -> impl Responder {
    match catalog::create_location(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(location) => HttpResponse::Created().json(location),
        Err(err) => service_error_response(err, "create location"),
    }
}

#[get("/businesses/{business_id}/products")]
/// Paginated product listing with optional description search.
pub async fn list_products(
    path: web::Path<i32>,
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog::load_products(repo.get_ref(), path.into_inner(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list products"),
    }
}

#[post("/businesses/{business_id}/products")]
pub async fn add_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match catalog::create_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => service_error_response(err, "create product"),
    }
}

#[post("/businesses/{business_id}/photos")]
pub async fn add_photo(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddPhotoForm>,
) -> impl Responder {
    match catalog::create_photo(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(photo) => HttpResponse::Created().json(photo),
        Err(err) => service_error_response(err, "create photo"),
    }
}

fn link(
    repo: &DieselRepository,
    (business_id, product_id): (i32, i32),
    kind: LinkKind,
    form: LinkProductForm,
) -> HttpResponse {
    match catalog::link_product(repo, business_id, product_id, kind, form) {
        Ok(()) => HttpResponse::Created().finish(),
        Err(err) => service_error_response(err, "link product"),
    }
}

#[post("/businesses/{business_id}/products/{product_id}/associates")]
pub async fn link_associate(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<LinkProductForm>,
) -> impl Responder {
    link(
        repo.get_ref(),
        path.into_inner(),
        LinkKind::Associate,
        form.into_inner(),
    )
}

#[post("/businesses/{business_id}/products/{product_id}/locations")]
pub async fn link_location(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<LinkProductForm>,
) -> impl Responder {
    link(
        repo.get_ref(),
        path.into_inner(),
        LinkKind::Location,
        form.into_inner(),
    )
}

#[post("/businesses/{business_id}/products/{product_id}/photos")]
pub async fn link_photo(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<LinkProductForm>,
) -> impl Responder {
    link(
        repo.get_ref(),
        path.into_inner(),
        LinkKind::Photo,
        form.into_inner(),
    )
}

#[get("/businesses/{business_id}/products/{product_id}/locations")]
pub async fn list_product_locations(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (business_id, product_id) = path.into_inner();
    match catalog::list_product_locations(repo.get_ref(), business_id, product_id) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list product locations"),
    }
}

#[get("/businesses/{business_id}/products/{product_id}/photos")]
pub async fn list_product_photos(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (business_id, product_id) = path.into_inner();
    match catalog::list_product_photos(repo.get_ref(), business_id, product_id) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => service_error_response(err, "list product photos"),
    }
}
