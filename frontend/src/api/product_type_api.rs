//! Client API calls for product type endpoints.

use common::product_type::ProductTypeDetails;
use dioxus::prelude::*;




#[server]
pub async fn product_type_list() -> Result<Vec<ProductTypeDetails>, ServerFnError> {
    let x = backend::api::product_types::product_type_list().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
