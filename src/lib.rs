pub mod config;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Actor recorded in the price revision log when a request names nobody.
pub const DEFAULT_CHANGED_BY: &str = "API_USER";
