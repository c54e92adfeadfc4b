use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, patch, post, put, web};
use chrono::Utc;
use validator::Validate;

use crate::forms::supplier_prices::{ActivePriceParams, SupplierMaterialParams, SupplierPriceForm};
use crate::repository::DieselRepository;
use crate::routes::{changed_by, error_response, list_response, service_error_response};
use crate::services::supplier_prices as pricing;

#[post("")]
/// Add a price record. Answers `201` with the stored record.
pub async fn add_price(
    req: HttpRequest,
    form: web::Json<SupplierPriceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match pricing::add_price(repo.get_ref(), form.into_inner(), &changed_by(&req)) {
        Ok(price) => HttpResponse::Created().json(price),
        Err(err) => service_error_response("Failed to add supplier price", err),
    }
}

#[put("/{id:\\d+}")]
pub async fn update_price(
    req: HttpRequest,
    path: web::Path<i32>,
    form: web::Json<SupplierPriceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let price_id = path.into_inner();
    match pricing::update_price(repo.get_ref(), price_id, form.into_inner(), &changed_by(&req)) {
        Ok(price) => HttpResponse::Ok().json(price),
        Err(err) => service_error_response("Failed to update supplier price", err),
    }
}

#[get("/{id:\\d+}")]
pub async fn get_price(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match pricing::get_price(repo.get_ref(), path.into_inner()) {
        Ok(price) => HttpResponse::Ok().json(price),
        Err(err) => service_error_response("Failed to load supplier price", err),
    }
}

#[get("/by-supplier/{supplier_id:\\d+}")]
pub async fn prices_by_supplier(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match pricing::list_prices_by_supplier(repo.get_ref(), path.into_inner()) {
        Ok(prices) => list_response(prices),
        Err(err) => service_error_response("Failed to list supplier prices", err),
    }
}

#[get("/by-material/{material_id:\\d+}")]
pub async fn prices_by_material(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match pricing::list_prices_by_material(repo.get_ref(), path.into_inner()) {
        Ok(prices) => list_response(prices),
        Err(err) => service_error_response("Failed to list material prices", err),
    }
}

#[get("/by-supplier-material")]
pub async fn prices_by_supplier_and_material(
    params: web::Query<SupplierMaterialParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(err) = params.validate() {
        return error_response(StatusCode::BAD_REQUEST, err.to_string());
    }

    match pricing::list_prices_by_supplier_and_material(
        repo.get_ref(),
        params.supplier_id,
        params.master_material_id,
    ) {
        Ok(prices) => list_response(prices),
        Err(err) => service_error_response("Failed to list supplier material prices", err),
    }
}

#[get("/active-price")]
/// Price in force for a supplier, material and unit on `date` (today when
/// omitted). Answers `404` when no active price applies.
pub async fn active_price(
    params: web::Query<ActivePriceParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match params.into_inner().into_query(Utc::now().date_naive()) {
        Ok(query) => query,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, err.to_string()),
    };

    let on_date = query.on_date;
    match pricing::get_active_price(repo.get_ref(), query) {
        Ok(Some(price)) => HttpResponse::Ok().json(price),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("No active price found for the given criteria on {on_date}."),
        ),
        Err(err) => service_error_response("Failed to resolve active price", err),
    }
}

#[patch("/{id:\\d+}/deactivate")]
pub async fn deactivate_price(
    req: HttpRequest,
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match pricing::deactivate_price(repo.get_ref(), path.into_inner(), &changed_by(&req)) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response("Failed to deactivate supplier price", err),
    }
}

#[get("/{id:\\d+}/history")]
/// Revision log of a price record, newest first.
pub async fn price_history(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match pricing::get_price_revision_history(repo.get_ref(), path.into_inner()) {
        Ok(revisions) => list_response(revisions),
        Err(err) => service_error_response("Failed to load price history", err),
    }
}
