//! Server function bindings for the backend API.

pub mod category_api;
pub mod product_type_api;
