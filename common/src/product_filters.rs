//! Shared product filter form models and helpers.

use serde::{Deserialize, Serialize};

use crate::product_type::ProductTypeSummary;

/// Uncommitted values of the product filter form, one entry per field.
///
/// Field names follow the dashboard wire format. A partially serialized
/// state deserializes with the remaining fields at their defaults, so
/// callers only ever supply the fields they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProductFilterState {
    pub name: String,
    #[serde(rename = "productTypes")]
    pub product_types: Vec<String>,
    pub price_min: String,
    pub price_max: String,
    pub published: String,
    pub highlighted: String,
}

impl ProductFilterState {
    pub fn apply(&mut self, change: &FilterFieldChange) {
        match change {
            FilterFieldChange::Name(value) => self.name = value.clone(),
            FilterFieldChange::ProductTypes(values) => self.product_types = values.clone(),
            FilterFieldChange::PriceMin(value) => self.price_min = value.clone(),
            FilterFieldChange::PriceMax(value) => self.price_max = value.clone(),
            FilterFieldChange::Published(value) => self.published = value.clone(),
            FilterFieldChange::Highlighted(value) => self.highlighted = value.clone(),
        }
    }
}

/// A single edited filter field together with its new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterFieldChange {
    #[serde(rename = "name")]
    Name(String),
    #[serde(rename = "productTypes")]
    ProductTypes(Vec<String>),
    #[serde(rename = "price_min")]
    PriceMin(String),
    #[serde(rename = "price_max")]
    PriceMax(String),
    #[serde(rename = "published")]
    Published(String),
    #[serde(rename = "highlighted")]
    Highlighted(String),
}

/// Payload handed to the submission callback: exactly one field per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSubmission {
    #[serde(rename = "formData")]
    pub form_data: FilterFieldChange,
}

/// Visible form state plus the single pending commit slot shared by all
/// fields.
///
/// The slot mirrors the form's single debounce timer: a new edit replaces
/// whatever was pending, no matter which field it belonged to. Only the
/// last edit inside a quiet window is ever committed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterFormModel {
    pub state: ProductFilterState,
    pending: Option<FilterFieldChange>,
}

impl FilterFormModel {
    pub fn new(initial: Option<ProductFilterState>) -> Self {
        Self {
            state: initial.unwrap_or_default(),
            pending: None,
        }
    }

    /// Applies the edit to the visible state right away and schedules it
    /// for commit, superseding any pending edit.
    pub fn edit(&mut self, change: FilterFieldChange) {
        self.state.apply(&change);
        self.pending = Some(change);
    }

    /// Takes the pending edit out of the slot once the quiet period is
    /// over. Returns `None` when nothing is pending, so a window commits
    /// at most once.
    pub fn commit(&mut self) -> Option<FilterSubmission> {
        let change = self.pending.take()?;
        Some(FilterSubmission { form_data: change })
    }

    /// Resets the visible state to the defaults. A pending edit stays
    /// pending: the clear action does not cancel a running quiet window.
    pub fn reset(&mut self) {
        self.state = ProductFilterState::default();
    }

    /// Replaces the visible state without touching the pending slot. Used
    /// when the caller-owned committed state changes under the form.
    pub fn sync_state(&mut self, state: ProductFilterState) {
        self.state = state;
    }
}

/// One selectable choice of a select-style filter field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn publishing_status_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("1", "Published"),
        FilterOption::new("0", "Not published"),
        FilterOption::new("", "All"),
    ]
}

pub fn highlighting_status_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("1", "Highlighted"),
        FilterOption::new("0", "Not highlighted"),
        FilterOption::new("", "All"),
    ]
}

pub fn product_type_options(product_types: &[ProductTypeSummary]) -> Vec<FilterOption> {
    product_types
        .iter()
        .map(|product_type| FilterOption {
            value: product_type.id.clone(),
            label: product_type.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_the_empty_record() {
        let state = ProductFilterState::default();
        assert_eq!(state.name, "");
        assert!(state.product_types.is_empty());
        assert_eq!(state.price_min, "");
        assert_eq!(state.price_max, "");
        assert_eq!(state.published, "");
        assert_eq!(state.highlighted, "");
    }

    #[test]
    fn partial_serialized_state_merges_over_defaults() {
        let state: ProductFilterState = serde_json::from_str(r#"{"name":"shoes"}"#).unwrap();
        assert_eq!(state.name, "shoes");
        assert_eq!(state.price_min, "");
        assert!(state.product_types.is_empty());
    }

    #[test]
    fn partial_programmatic_state_merges_over_defaults() {
        let state = ProductFilterState {
            price_min: "10".to_string(),
            price_max: "50".to_string(),
            ..Default::default()
        };
        let model = FilterFormModel::new(Some(state));
        assert_eq!(model.state.price_min, "10");
        assert_eq!(model.state.price_max, "50");
        assert_eq!(model.state.name, "");
    }

    #[test]
    fn repeated_edits_to_one_field_commit_only_the_last_value() {
        let mut model = FilterFormModel::new(None);
        model.edit(FilterFieldChange::Name("S".to_string()));
        model.edit(FilterFieldChange::Name("Sh".to_string()));
        model.edit(FilterFieldChange::Name("Shoes".to_string()));

        let submission = model.commit().unwrap();
        assert_eq!(
            submission.form_data,
            FilterFieldChange::Name("Shoes".to_string())
        );
        // the window committed, nothing is left to fire
        assert_eq!(model.commit(), None);
    }

    #[test]
    fn edits_to_a_then_b_commit_only_b() {
        let mut model = FilterFormModel::new(None);
        model.edit(FilterFieldChange::Name("Shoes".to_string()));
        model.edit(FilterFieldChange::PriceMin("10".to_string()));

        let submission = model.commit().unwrap();
        assert_eq!(
            submission.form_data,
            FilterFieldChange::PriceMin("10".to_string())
        );
        assert_eq!(model.commit(), None);
        // the superseded edit still shows in the visible state
        assert_eq!(model.state.name, "Shoes");
    }

    #[test]
    fn clear_resets_state_but_leaves_pending_commit() {
        let mut model = FilterFormModel::new(None);
        model.edit(FilterFieldChange::Published("1".to_string()));
        model.reset();

        assert_eq!(model.state, ProductFilterState::default());
        let submission = model.commit().unwrap();
        assert_eq!(
            submission.form_data,
            FilterFieldChange::Published("1".to_string())
        );
    }

    #[test]
    fn submission_payload_carries_exactly_one_field() {
        let submission = FilterSubmission {
            form_data: FilterFieldChange::Name("Shoes".to_string()),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json, serde_json::json!({"formData": {"name": "Shoes"}}));

        let submission = FilterSubmission {
            form_data: FilterFieldChange::ProductTypes(vec!["pt-1".to_string()]),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"formData": {"productTypes": ["pt-1"]}})
        );
    }

    #[test]
    fn name_edit_does_not_disturb_price_fields() {
        let initial = ProductFilterState {
            price_min: "10".to_string(),
            price_max: "50".to_string(),
            ..Default::default()
        };
        let mut model = FilterFormModel::new(Some(initial));
        model.edit(FilterFieldChange::Name("Shoes".to_string()));

        let submission = model.commit().unwrap();
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            serde_json::json!({"formData": {"name": "Shoes"}})
        );
        assert_eq!(model.state.price_min, "10");
        assert_eq!(model.state.price_max, "50");
    }

    #[test]
    fn status_option_lists_are_fixed() {
        let published = publishing_status_options();
        let labels: Vec<_> = published.iter().map(|o| o.label.as_str()).collect();
        let values: Vec<_> = published.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(labels, ["Published", "Not published", "All"]);
        assert_eq!(values, ["1", "0", ""]);

        let highlighted = highlighting_status_options();
        let labels: Vec<_> = highlighted.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Highlighted", "Not highlighted", "All"]);
    }

    #[test]
    fn product_type_options_map_id_and_name() {
        let product_types = vec![
            ProductTypeSummary {
                id: "pt-1".to_string(),
                name: "Mugs".to_string(),
            },
            ProductTypeSummary {
                id: "pt-2".to_string(),
                name: "T-Shirts".to_string(),
            },
        ];
        let options = product_type_options(&product_types);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "pt-1");
        assert_eq!(options[0].label, "Mugs");
        assert_eq!(options[1].value, "pt-2");
        assert_eq!(options[1].label, "T-Shirts");
    }
}
