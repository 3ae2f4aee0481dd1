//! Static fixture data for the component demo pages.

use common::category::CategoryDetails;

use crate::components::catalog_components::category_edit_form::FormError;

/// A category as the demo pages show it. Pass an empty string for a root
/// category.
pub fn category_fixture(parent_id: &str) -> CategoryDetails {
    CategoryDetails {
        id: "Q2F0ZWdvcnk6Nw==".to_string(),
        name: "Garments".to_string(),
        description: "Clothing for men and women, from t-shirts to night gowns.".to_string(),
        parent_id: if parent_id.is_empty() {
            None
        } else {
            Some(parent_id.to_string())
        },
    }
}

pub fn category_form_errors() -> Vec<FormError> {
    vec![
        FormError {
            field: "name".to_string(),
            message: "This field is required.".to_string(),
        },
        FormError {
            field: "description".to_string(),
            message: "Description is too long.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parent_follows_the_argument() {
        assert_eq!(category_fixture("").parent_id, None);
        assert_eq!(
            category_fixture("cat-1").parent_id.as_deref(),
            Some("cat-1")
        );
    }
}
