use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::suppliers::SupplierForm;
use crate::repository::DieselRepository;
use crate::routes::{NameParams, SearchParams, list_response, service_error_response};
use crate::services::suppliers as supplier_service;

#[post("")]
pub async fn create_supplier(
    form: web::Json<SupplierForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::create_supplier(repo.get_ref(), form.into_inner()) {
        Ok(supplier) => HttpResponse::Created().json(supplier),
        Err(err) => service_error_response("Failed to create supplier", err),
    }
}

#[get("")]
pub async fn list_suppliers(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::list_suppliers(repo.get_ref(), params.search.as_deref()) {
        Ok(suppliers) => list_response(suppliers),
        Err(err) => service_error_response("Failed to list suppliers", err),
    }
}

#[get("/by-name")]
pub async fn supplier_by_name(
    params: web::Query<NameParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::get_supplier_by_name(repo.get_ref(), &params.name) {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => service_error_response("Failed to load supplier", err),
    }
}

#[get("/{id:\\d+}")]
pub async fn get_supplier(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match supplier_service::get_supplier(repo.get_ref(), path.into_inner()) {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => service_error_response("Failed to load supplier", err),
    }
}

#[put("/{id:\\d+}")]
pub async fn update_supplier(
    path: web::Path<i32>,
    form: web::Json<SupplierForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::update_supplier(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => service_error_response("Failed to update supplier", err),
    }
}

#[delete("/{id:\\d+}")]
pub async fn delete_supplier(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::delete_supplier(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("Failed to delete supplier", err),
    }
}
