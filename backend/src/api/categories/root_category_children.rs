//! Top-level category listing.

use common::category::CategorySummary;
use serde::Deserialize;

use crate::graphql::execute_query;

const ROOT_CATEGORY_CHILDREN_QUERY: &str = "
query RootCategoryChildren {
  categories(level: 0) {
    edges {
      cursor
      node {
        id
        name
      }
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct RootCategoryChildrenData {
    categories: RawCategoryConnection,
}

#[derive(Debug, Deserialize)]
struct RawCategoryConnection {
    edges: Vec<RawCategoryEdge>,
}

#[derive(Debug, Deserialize)]
struct RawCategoryEdge {
    node: RawCategoryNode,
}

#[derive(Debug, Deserialize)]
struct RawCategoryNode {
    id: String,
    name: String,
}

pub async fn root_category_children() -> anyhow::Result<Vec<CategorySummary>> {
    let data: RootCategoryChildrenData = execute_query(
        ROOT_CATEGORY_CHILDREN_QUERY,
        "RootCategoryChildren",
        serde_json::json!({}),
    )
    .await?;
    Ok(map_categories(data))
}

fn map_categories(data: RootCategoryChildrenData) -> Vec<CategorySummary> {
    data.categories
        .edges
        .into_iter()
        .map(|edge| CategorySummary {
            id: edge.node.id,
            name: edge.node.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_map_to_summaries_in_order() {
        let data: RootCategoryChildrenData = serde_json::from_str(
            r#"{
                "categories": {
                    "edges": [
                        {"cursor": "YXJyYXk6MA==", "node": {"id": "cat-1", "name": "Apparel"}},
                        {"cursor": "YXJyYXk6MQ==", "node": {"id": "cat-2", "name": "Groceries"}}
                    ]
                }
            }"#,
        )
        .unwrap();
        let categories = map_categories(data);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "cat-1");
        assert_eq!(categories[0].name, "Apparel");
        assert_eq!(categories[1].id, "cat-2");
    }

    #[test]
    fn empty_connection_maps_to_empty_list() {
        let data: RootCategoryChildrenData =
            serde_json::from_str(r#"{"categories": {"edges": []}}"#).unwrap();
        assert!(map_categories(data).is_empty());
    }
}
