use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::item_categories::ItemCategoryForm;
use crate::repository::DieselRepository;
use crate::routes::{list_response, service_error_response};
use crate::services::item_categories as category_service;

#[post("")]
pub async fn create_item_category(
    form: web::Json<ItemCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::create_item_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => service_error_response("Failed to create item category", err),
    }
}

#[get("")]
pub async fn list_item_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match category_service::list_item_categories(repo.get_ref()) {
        Ok(categories) => list_response(categories),
        Err(err) => service_error_response("Failed to list item categories", err),
    }
}

#[get("/{id:\\d+}")]
pub async fn get_item_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::get_item_category(repo.get_ref(), path.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response("Failed to load item category", err),
    }
}

#[put("/{id:\\d+}")]
pub async fn update_item_category(
    path: web::Path<i32>,
    form: web::Json<ItemCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::update_item_category(repo.get_ref(), path.into_inner(), form.into_inner())
    {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response("Failed to update item category", err),
    }
}

#[delete("/{id:\\d+}")]
pub async fn delete_item_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::delete_item_category(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("Failed to delete item category", err),
    }
}
