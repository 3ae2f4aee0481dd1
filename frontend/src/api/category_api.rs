//! Client API calls for category endpoints.

use common::category::{CategoryDetails, CategoryProperties, CategorySummary};
use dioxus::prelude::*;




#[server]
pub async fn category_details(id: String) -> Result<CategoryDetails, ServerFnError> {
    let x = backend::api::categories::category_details(id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn root_category_children() -> Result<Vec<CategorySummary>, ServerFnError> {
    let x = backend::api::categories::root_category_children().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn category_properties(id: String, first: u64, after: Option<String>) -> Result<CategoryProperties, ServerFnError> {
    let x = backend::api::categories::category_properties(id, first, after).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
