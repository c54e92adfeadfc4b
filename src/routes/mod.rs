//! JSON API served under `/api/v1`.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error, web};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_CHANGED_BY;
use crate::services::ServiceError;

pub mod brands;
pub mod item_categories;
pub mod master_materials;
pub mod sites;
pub mod supplier_prices;
pub mod suppliers;

/// Header carrying the opaque identifier of whoever makes a price change.
pub const CHANGED_BY_HEADER: &str = "X-Changed-By";

/// Body returned with every error status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().naive_utc(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: message.into(),
        }
    }
}

/// Optional name filter accepted by list endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default, alias = "nameFragment")]
    pub search: Option<String>,
}

/// Exact name accepted by `by-name` lookups.
#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: String,
}

/// Register every API route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
            .app_data(web::PathConfig::default().error_handler(|err, _req| bad_request(err)))
            .service(
                web::scope("/supplier-prices")
                    .service(supplier_prices::add_price)
                    .service(supplier_prices::active_price)
                    .service(supplier_prices::prices_by_supplier_and_material)
                    .service(supplier_prices::prices_by_supplier)
                    .service(supplier_prices::prices_by_material)
                    .service(supplier_prices::get_price)
                    .service(supplier_prices::update_price)
                    .service(supplier_prices::deactivate_price)
                    .service(supplier_prices::price_history),
            )
            .service(
                web::scope("/suppliers")
                    .service(suppliers::create_supplier)
                    .service(suppliers::list_suppliers)
                    .service(suppliers::supplier_by_name)
                    .service(suppliers::get_supplier)
                    .service(suppliers::update_supplier)
                    .service(suppliers::delete_supplier),
            )
            .service(
                web::scope("/item-categories")
                    .service(item_categories::create_item_category)
                    .service(item_categories::list_item_categories)
                    .service(item_categories::get_item_category)
                    .service(item_categories::update_item_category)
                    .service(item_categories::delete_item_category),
            )
            .service(
                web::scope("/master-materials")
                    .service(master_materials::create_master_material)
                    .service(master_materials::list_master_materials)
                    .service(master_materials::master_material_by_code)
                    .service(master_materials::master_materials_by_category)
                    .service(master_materials::master_materials_by_brand)
                    .service(master_materials::get_master_material)
                    .service(master_materials::update_master_material)
                    .service(master_materials::delete_master_material),
            )
            .service(
                web::scope("/brands")
                    .service(brands::create_brand)
                    .service(brands::list_brands)
                    .service(brands::brand_by_name)
                    .service(brands::get_brand)
                    .service(brands::update_brand)
                    .service(brands::update_brand_image)
                    .service(brands::delete_brand),
            )
            .service(
                web::scope("/sites")
                    .service(sites::create_site)
                    .service(sites::list_sites)
                    .service(sites::get_site)
                    .service(sites::update_site)
                    .service(sites::delete_site),
            ),
    );
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(status, message))
}

/// Translate a service failure into its HTTP answer. Internal details are
/// logged under `context` and never sent to the client.
pub(crate) fn service_error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
        ServiceError::InvalidData(message) | ServiceError::Form(message) => {
            error_response(StatusCode::BAD_REQUEST, message)
        }
        ServiceError::Conflict(message) => error_response(StatusCode::CONFLICT, message),
        ServiceError::Internal(message) => {
            log::error!("{context}: {message}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred.",
            )
        }
    }
}

/// `200` with the items, or `204` when there are none.
pub(crate) fn list_response<T: Serialize>(items: Vec<T>) -> HttpResponse {
    if items.is_empty() {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::Ok().json(items)
    }
}

/// Actor recorded in the price revision log.
pub(crate) fn changed_by(req: &HttpRequest) -> String {
    req.headers()
        .get(CHANGED_BY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_CHANGED_BY)
        .to_string()
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = error_response(StatusCode::BAD_REQUEST, err.to_string());
    error::InternalError::from_response(err, response).into()
}
