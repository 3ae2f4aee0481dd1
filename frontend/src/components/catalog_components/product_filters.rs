//! Debounced product filter form.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use common::product_filters::{
    FilterFieldChange, FilterFormModel, FilterSubmission, ProductFilterState,
    highlighting_status_options, product_type_options, publishing_status_options,
};
use common::product_type::ProductTypeSummary;

use crate::components::filter_fields::filter_card::FilterCard;
use crate::components::filter_fields::filter_text_field::FilterTextField;
use crate::components::filter_fields::form_spacer::FormSpacer;
use crate::components::filter_fields::multi_select_field::MultiSelectField;
use crate::components::filter_fields::price_range_field::PriceRangeField;
use crate::components::filter_fields::single_select_field::SingleSelectField;

/// Quiet period between the last edit and the commit of that field.
const FILTER_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn ProductFilters(
    product_types: ReadSignal<Vec<ProductTypeSummary>>,
    form_state: ReadSignal<Option<ProductFilterState>>,
    on_submit: Callback<FilterSubmission>,
    on_clear: Callback<()>,
) -> Element {
    let mut model = use_signal(|| FilterFormModel::new(form_state.peek().clone()));
    // the committed state lives in the URL; re-entering the route resyncs
    // the visible fields, as signals are not reset by navigation
    use_effect(move || {
        let incoming = form_state.read().clone();
        model.write().sync_state(incoming.unwrap_or_default());
    });

    let debounce_timer = use_hook(|| Rc::new(RefCell::new(None::<Timeout>)));

    let handle_change = {
        let debounce_timer = debounce_timer.clone();
        Callback::new(move |change: FilterFieldChange| {
            model.write().edit(change);
            // one timer for the whole form: the newest edit supersedes the
            // pending one, whichever field it came from
            if let Some(timer) = debounce_timer.borrow_mut().take() {
                timer.cancel();
            }
            *debounce_timer.borrow_mut() = Some(Timeout::new(FILTER_DEBOUNCE_MS, move || {
                if let Some(submission) = model.write().commit() {
                    on_submit(submission);
                }
            }));
        })
    };

    // a quiet window that is already running is left alone here
    let handle_clear = Callback::new(move |_: ()| {
        model.write().reset();
        on_clear(());
    });

    let state = use_memo(move || model.read().state.clone());
    let product_type_choices = use_memo(move || product_type_options(&product_types.read()));

    rsx! {
        FilterCard {
            on_clear: handle_clear,
            FilterTextField {
                label: "Name".to_string(),
                value: state.read().name.clone(),
                on_change: move |value: String| {
                    handle_change(FilterFieldChange::Name(value));
                },
            }
            FormSpacer {}
            MultiSelectField {
                label: "Product type".to_string(),
                choices: product_type_choices.read().clone(),
                value: state.read().product_types.clone(),
                on_change: move |values: Vec<String>| {
                    handle_change(FilterFieldChange::ProductTypes(values));
                },
            }
            FormSpacer {}
            PriceRangeField {
                label: "Price".to_string(),
                currency_symbol: "USD".to_string(),
                min_value: state.read().price_min.clone(),
                max_value: state.read().price_max.clone(),
                on_change_min: move |value: String| {
                    handle_change(FilterFieldChange::PriceMin(value));
                },
                on_change_max: move |value: String| {
                    handle_change(FilterFieldChange::PriceMax(value));
                },
            }
            FormSpacer {}
            SingleSelectField {
                label: "Published".to_string(),
                choices: publishing_status_options(),
                value: state.read().published.clone(),
                on_change: move |value: String| {
                    handle_change(FilterFieldChange::Published(value));
                },
            }
            FormSpacer {}
            SingleSelectField {
                label: "Highlighted".to_string(),
                choices: highlighting_status_options(),
                value: state.read().highlighted.clone(),
                on_change: move |value: String| {
                    handle_change(FilterFieldChange::Highlighted(value));
                },
            }
        }
    }
}
