use common::product_filters::FilterOption;
use dioxus::prelude::*;

#[component]
pub fn SingleSelectField(
    label: ReadSignal<String>,
    choices: ReadSignal<Vec<FilterOption>>,
    value: ReadSignal<String>,
    on_change: Callback<String>,
) -> Element {
    let selected_value = use_memo(move || value.read().clone());
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; width: 100%;",
            div {
                style: "font-size: 14px; font-weight: 500; color: #6B7280;",
                "{label}"
            }
            select {
                style: "
                    width: 100%;
                    border: none;
                    border-bottom: 1px solid #D1D5DB;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                    padding: 4px 0;
                    cursor: pointer;
                ",
                value: "{selected_value}",
                onchange: move |event: Event<FormData>| {
                    on_change(event.value());
                },
                for choice in choices.read().clone() {
                    option {
                        key: "{choice.value}-{choice.label}",
                        value: "{choice.value}",
                        selected: choice.value == *selected_value.read(),
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
