use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::master_materials::MasterMaterialForm;
use crate::repository::DieselRepository;
use crate::routes::{SearchParams, list_response, service_error_response};
use crate::services::master_materials as material_service;

#[post("")]
pub async fn create_master_material(
    form: web::Json<MasterMaterialForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::create_master_material(repo.get_ref(), form.into_inner()) {
        Ok(material) => HttpResponse::Created().json(material),
        Err(err) => service_error_response("Failed to create master material", err),
    }
}

#[get("")]
pub async fn list_master_materials(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::list_master_materials(repo.get_ref(), params.search.as_deref()) {
        Ok(materials) => list_response(materials),
        Err(err) => service_error_response("Failed to list master materials", err),
    }
}

#[get("/by-code/{code}")]
pub async fn master_material_by_code(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::get_master_material_by_code(repo.get_ref(), &path.into_inner()) {
        Ok(material) => HttpResponse::Ok().json(material),
        Err(err) => service_error_response("Failed to load master material", err),
    }
}

#[get("/by-category/{category_id:\\d+}")]
pub async fn master_materials_by_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::list_master_materials_by_category(repo.get_ref(), path.into_inner()) {
        Ok(materials) => list_response(materials),
        Err(err) => service_error_response("Failed to list master materials", err),
    }
}

#[get("/by-brand/{brand_id:\\d+}")]
pub async fn master_materials_by_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::list_master_materials_by_brand(repo.get_ref(), path.into_inner()) {
        Ok(materials) => list_response(materials),
        Err(err) => service_error_response("Failed to list master materials", err),
    }
}

#[get("/{id:\\d+}")]
pub async fn get_master_material(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::get_master_material(repo.get_ref(), path.into_inner()) {
        Ok(material) => HttpResponse::Ok().json(material),
        Err(err) => service_error_response("Failed to load master material", err),
    }
}

#[put("/{id:\\d+}")]
pub async fn update_master_material(
    path: web::Path<i32>,
    form: web::Json<MasterMaterialForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::update_master_material(
        repo.get_ref(),
        path.into_inner(),
        form.into_inner(),
    ) {
        Ok(material) => HttpResponse::Ok().json(material),
        Err(err) => service_error_response("Failed to update master material", err),
    }
}

#[delete("/{id:\\d+}")]
pub async fn delete_master_material(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match material_service::delete_master_material(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("Failed to delete master material", err),
    }
}
