//! Category query result models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
}

/// Everything the category screen needs in one shot: the category itself,
/// its direct children and one cursor page of its products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProperties {
    pub details: CategoryDetails,
    pub children: Vec<CategorySummary>,
    pub products: ProductConnection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConnection {
    pub total_count: u64,
    pub page_info: PageInfo,
    pub edges: Vec<ProductEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEdge {
    pub cursor: String,
    pub node: ProductSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub price_localized: String,
}
