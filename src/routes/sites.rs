use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::sites::SiteForm;
use crate::repository::DieselRepository;
use crate::routes::{list_response, service_error_response};
use crate::services::sites as site_service;

#[post("")]
pub async fn create_site(
    form: web::Json<SiteForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match site_service::create_site(repo.get_ref(), form.into_inner()) {
        Ok(site) => HttpResponse::Created().json(site),
        Err(err) => service_error_response("Failed to create site", err),
    }
}

#[get("")]
pub async fn list_sites(repo: web::Data<DieselRepository>) -> impl Responder {
    match site_service::list_sites(repo.get_ref()) {
        Ok(sites) => list_response(sites),
        Err(err) => service_error_response("Failed to list sites", err),
    }
}

#[get("/{id:\\d+}")]
pub async fn get_site(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match site_service::get_site(repo.get_ref(), path.into_inner()) {
        Ok(site) => HttpResponse::Ok().json(site),
        Err(err) => service_error_response("Failed to load site", err),
    }
}

#[put("/{id:\\d+}")]
pub async fn update_site(
    path: web::Path<i32>,
    form: web::Json<SiteForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match site_service::update_site(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(site) => HttpResponse::Ok().json(site),
        Err(err) => service_error_response("Failed to update site", err),
    }
}

#[delete("/{id:\\d+}")]
pub async fn delete_site(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match site_service::delete_site(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("Failed to delete site", err),
    }
}
