//! Category edit form card.

use common::category::CategoryDetails;
use dioxus::prelude::*;

use crate::components::filter_fields::form_spacer::FormSpacer;

/// Server-side validation message attached to one form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormError {
    pub field: String,
    pub message: String,
}

#[component]
pub fn CategoryEditForm(
    category: ReadSignal<CategoryDetails>,
    disabled: ReadSignal<bool>,
    errors: ReadSignal<Vec<FormError>>,
    on_back: Callback<()>,
    on_submit: Callback<CategoryDetails>,
) -> Element {
    let mut name = use_signal(|| category.read().name.clone());
    let mut description = use_signal(|| category.read().description.clone());
    use_effect(move || {
        let incoming = category.read().clone();
        name.set(incoming.name);
        description.set(incoming.description);
    });

    let name_error = use_memo(move || field_error(&errors.read(), "name"));
    let description_error = use_memo(move || field_error(&errors.read(), "description"));

    rsx! {
        div {
            id: "x-category-edit-card",
            style: "
                display: flex;
                flex-direction: column;
                width: 480px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.06);
                padding: 18px;
            ",
            h2 {
                style: "font-size: 20px; font-weight: 500; color: #111827; margin: 0 0 12px 0;",
                "Edit Category"
            }

            div {
                style: "font-size: 14px; font-weight: 500; color: #6B7280;",
                "Name"
            }
            input {
                r#type: "text",
                value: "{name}",
                disabled: *disabled.read(),
                style: "
                    width: 100%;
                    border: none;
                    border-bottom: 1px solid #D1D5DB;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                    padding: 4px 0;
                    box-sizing: border-box;
                ",
                oninput: move |event: Event<FormData>| {
                    name.set(event.value());
                },
            }
            if let Some(error) = name_error() {
                div {
                    style: "color: #B91C1C; font-size: 13px; margin-top: 2px;",
                    "{error}"
                }
            }

            FormSpacer {}

            div {
                style: "font-size: 14px; font-weight: 500; color: #6B7280;",
                "Description"
            }
            textarea {
                value: "{description}",
                disabled: *disabled.read(),
                rows: "5",
                style: "
                    width: 100%;
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                    padding: 6px;
                    box-sizing: border-box;
                    resize: vertical;
                ",
                oninput: move |event: Event<FormData>| {
                    description.set(event.value());
                },
            }
            if let Some(error) = description_error() {
                div {
                    style: "color: #B91C1C; font-size: 13px; margin-top: 2px;",
                    "{error}"
                }
            }

            FormSpacer {}

            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                button {
                    style: "
                        height: 34px;
                        padding: 0 12px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        border: 1px solid #D1D5DB;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        on_back(());
                    },
                    "Back"
                }
                div { style: "flex-grow: 1;" }
                button {
                    disabled: *disabled.read(),
                    style: "
                        height: 34px;
                        padding: 0 16px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: #4F46E5;
                        color: white;
                        border: none;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let updated = CategoryDetails {
                            id: category.read().id.clone(),
                            name: name.read().clone(),
                            description: description.read().clone(),
                            parent_id: category.read().parent_id.clone(),
                        };
                        on_submit(updated);
                    },
                    "Save"
                }
            }
        }
    }
}

fn field_error(errors: &[FormError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message.clone())
}
