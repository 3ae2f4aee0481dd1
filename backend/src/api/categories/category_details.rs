//! Single category lookup.

use common::category::CategoryDetails;
use serde::{Deserialize, Serialize};

use crate::graphql::execute_query;

const CATEGORY_DETAILS_QUERY: &str = "
query CategoryDetails($id: ID!) {
  category(id: $id) {
    id
    name
    description
    parent {
      id
    }
  }
}
";

#[derive(Debug, Serialize)]
struct CategoryDetailsVariables<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct CategoryDetailsData {
    category: Option<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    id: String,
    name: String,
    description: Option<String>,
    parent: Option<RawParentRef>,
}

#[derive(Debug, Deserialize)]
struct RawParentRef {
    id: String,
}

pub async fn category_details(id: String) -> anyhow::Result<CategoryDetails> {
    let data: CategoryDetailsData = execute_query(
        CATEGORY_DETAILS_QUERY,
        "CategoryDetails",
        CategoryDetailsVariables { id: &id },
    )
    .await?;
    let Some(category) = data.category else {
        anyhow::bail!("category not found: {}", id);
    };
    Ok(map_category(category))
}

fn map_category(raw: RawCategory) -> CategoryDetails {
    CategoryDetails {
        id: raw.id,
        name: raw.name,
        description: raw.description.unwrap_or_default(),
        parent_id: raw.parent.map(|parent| parent.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_maps_to_details() {
        let data: CategoryDetailsData = serde_json::from_str(
            r#"{
                "category": {
                    "id": "cat-7",
                    "name": "Apparel",
                    "description": "Things to wear",
                    "parent": {"id": "cat-1"}
                }
            }"#,
        )
        .unwrap();
        let details = map_category(data.category.unwrap());
        assert_eq!(details.id, "cat-7");
        assert_eq!(details.name, "Apparel");
        assert_eq!(details.description, "Things to wear");
        assert_eq!(details.parent_id.as_deref(), Some("cat-1"));
    }

    #[test]
    fn root_category_has_no_parent_and_null_description_is_empty() {
        let data: CategoryDetailsData = serde_json::from_str(
            r#"{"category": {"id": "cat-1", "name": "Root", "description": null, "parent": null}}"#,
        )
        .unwrap();
        let details = map_category(data.category.unwrap());
        assert_eq!(details.description, "");
        assert_eq!(details.parent_id, None);
    }

    #[test]
    fn missing_category_deserializes_as_none() {
        let data: CategoryDetailsData = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert!(data.category.is_none());
    }
}
