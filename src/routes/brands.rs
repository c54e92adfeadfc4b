use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};

use crate::forms::brands::{BrandForm, BrandImageForm};
use crate::repository::DieselRepository;
use crate::routes::{NameParams, SearchParams, list_response, service_error_response};
use crate::services::brands as brand_service;

#[post("")]
pub async fn create_brand(
    form: web::Json<BrandForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brand_service::create_brand(repo.get_ref(), form.into_inner()) {
        Ok(brand) => HttpResponse::Created().json(brand),
        Err(err) => service_error_response("Failed to create brand", err),
    }
}

#[get("")]
pub async fn list_brands(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brand_service::list_brands(repo.get_ref(), params.search.as_deref()) {
        Ok(brands) => list_response(brands),
        Err(err) => service_error_response("Failed to list brands", err),
    }
}

#[get("/by-name")]
pub async fn brand_by_name(
    params: web::Query<NameParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brand_service::get_brand_by_name(repo.get_ref(), &params.name) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(err) => service_error_response("Failed to load brand", err),
    }
}

#[get("/{id:\\d+}")]
pub async fn get_brand(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match brand_service::get_brand(repo.get_ref(), path.into_inner()) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(err) => service_error_response("Failed to load brand", err),
    }
}

#[put("/{id:\\d+}")]
pub async fn update_brand(
    path: web::Path<i32>,
    form: web::Json<BrandForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brand_service::update_brand(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(err) => service_error_response("Failed to update brand", err),
    }
}

#[patch("/{id:\\d+}/image-path")]
pub async fn update_brand_image(
    path: web::Path<i32>,
    form: web::Json<BrandImageForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brand_service::update_brand_image(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(err) => service_error_response("Failed to update brand image", err),
    }
}

#[delete("/{id:\\d+}")]
pub async fn delete_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brand_service::delete_brand(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("Failed to delete brand", err),
    }
}
