//! Category screen payload: details, children and one cursor page of
//! products. Pagination itself is the upstream API's job, this module only
//! forwards `first`/`after` and hands the page info back.

use common::category::{
    CategoryDetails, CategoryProperties, CategorySummary, PageInfo, ProductConnection,
    ProductEdge, ProductSummary,
};
use serde::{Deserialize, Serialize};

use crate::graphql::execute_query;

const CATEGORY_PROPERTIES_QUERY: &str = "
query CategoryProperties($id: ID!, $first: Int!, $after: String) {
  category(id: $id) {
    id
    name
    description
    parent {
      id
    }
    children {
      edges {
        node {
          id
          name
        }
      }
    }
    products(first: $first, after: $after) {
      totalCount
      pageInfo {
        endCursor
        hasNextPage
      }
      edges {
        cursor
        node {
          id
          name
          thumbnailUrl
          price {
            localized
          }
        }
      }
    }
  }
}
";

#[derive(Debug, Serialize)]
struct CategoryPropertiesVariables<'a> {
    id: &'a str,
    first: u64,
    after: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CategoryPropertiesData {
    category: Option<RawCategoryProperties>,
}

#[derive(Debug, Deserialize)]
struct RawCategoryProperties {
    id: String,
    name: String,
    description: Option<String>,
    parent: Option<RawParentRef>,
    children: RawCategoryChildren,
    products: RawProductConnection,
}

#[derive(Debug, Deserialize)]
struct RawParentRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RawCategoryChildren {
    edges: Vec<RawCategoryChildEdge>,
}

#[derive(Debug, Deserialize)]
struct RawCategoryChildEdge {
    node: RawCategoryChildNode,
}

#[derive(Debug, Deserialize)]
struct RawCategoryChildNode {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProductConnection {
    total_count: u64,
    page_info: RawPageInfo,
    edges: Vec<RawProductEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageInfo {
    end_cursor: Option<String>,
    has_next_page: bool,
}

#[derive(Debug, Deserialize)]
struct RawProductEdge {
    cursor: String,
    node: RawProductNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProductNode {
    id: String,
    name: String,
    thumbnail_url: Option<String>,
    price: Option<RawPrice>,
}

#[derive(Debug, Deserialize)]
struct RawPrice {
    localized: String,
}

pub async fn category_properties(
    id: String,
    first: u64,
    after: Option<String>,
) -> anyhow::Result<CategoryProperties> {
    let data: CategoryPropertiesData = execute_query(
        CATEGORY_PROPERTIES_QUERY,
        "CategoryProperties",
        CategoryPropertiesVariables {
            id: &id,
            first,
            after: after.as_deref(),
        },
    )
    .await?;
    let Some(category) = data.category else {
        anyhow::bail!("category not found: {}", id);
    };
    Ok(map_properties(category))
}

fn map_properties(raw: RawCategoryProperties) -> CategoryProperties {
    CategoryProperties {
        details: CategoryDetails {
            id: raw.id,
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            parent_id: raw.parent.map(|parent| parent.id),
        },
        children: raw
            .children
            .edges
            .into_iter()
            .map(|edge| CategorySummary {
                id: edge.node.id,
                name: edge.node.name,
            })
            .collect(),
        products: ProductConnection {
            total_count: raw.products.total_count,
            page_info: PageInfo {
                end_cursor: raw.products.page_info.end_cursor,
                has_next_page: raw.products.page_info.has_next_page,
            },
            edges: raw
                .products
                .edges
                .into_iter()
                .map(|edge| ProductEdge {
                    cursor: edge.cursor,
                    node: ProductSummary {
                        id: edge.node.id,
                        name: edge.node.name,
                        thumbnail_url: edge.node.thumbnail_url,
                        price_localized: edge
                            .node
                            .price
                            .map(|price| price.localized)
                            .unwrap_or_default(),
                    },
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "category": {
            "id": "cat-7",
            "name": "Apparel",
            "description": "Things to wear",
            "parent": {"id": "cat-1"},
            "children": {
                "edges": [
                    {"node": {"id": "cat-8", "name": "Shoes"}}
                ]
            },
            "products": {
                "totalCount": 25,
                "pageInfo": {"endCursor": "YXJyYXk6MTE=", "hasNextPage": true},
                "edges": [
                    {
                        "cursor": "YXJyYXk6MTA=",
                        "node": {
                            "id": "prod-10",
                            "name": "Sneaker",
                            "thumbnailUrl": "/media/sneaker.png",
                            "price": {"localized": "$39.00"}
                        }
                    },
                    {
                        "cursor": "YXJyYXk6MTE=",
                        "node": {
                            "id": "prod-11",
                            "name": "Boot",
                            "thumbnailUrl": null,
                            "price": null
                        }
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn response_maps_to_properties() {
        let data: CategoryPropertiesData = serde_json::from_str(RESPONSE).unwrap();
        let properties = map_properties(data.category.unwrap());

        assert_eq!(properties.details.id, "cat-7");
        assert_eq!(properties.details.parent_id.as_deref(), Some("cat-1"));
        assert_eq!(properties.children.len(), 1);
        assert_eq!(properties.children[0].name, "Shoes");

        let products = &properties.products;
        assert_eq!(products.total_count, 25);
        assert_eq!(products.page_info.end_cursor.as_deref(), Some("YXJyYXk6MTE="));
        assert!(products.page_info.has_next_page);
        assert_eq!(products.edges.len(), 2);
        assert_eq!(products.edges[0].cursor, "YXJyYXk6MTA=");
        assert_eq!(products.edges[0].node.price_localized, "$39.00");
        assert_eq!(products.edges[1].node.thumbnail_url, None);
        assert_eq!(products.edges[1].node.price_localized, "");
    }

    #[test]
    fn last_page_has_no_end_cursor() {
        let data: CategoryPropertiesData = serde_json::from_str(
            r#"{
                "category": {
                    "id": "cat-9",
                    "name": "Empty",
                    "description": null,
                    "parent": null,
                    "children": {"edges": []},
                    "products": {
                        "totalCount": 0,
                        "pageInfo": {"endCursor": null, "hasNextPage": false},
                        "edges": []
                    }
                }
            }"#,
        )
        .unwrap();
        let properties = map_properties(data.category.unwrap());
        assert_eq!(properties.products.page_info.end_cursor, None);
        assert!(!properties.products.page_info.has_next_page);
        assert!(properties.products.edges.is_empty());
    }
}
