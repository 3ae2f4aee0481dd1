use common::product_filters::FilterOption;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_navigation_icons::MdArrowDropDown,
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
    },
};

#[component]
pub fn MultiSelectField(
    label: ReadSignal<String>,
    choices: ReadSignal<Vec<FilterOption>>,
    value: ReadSignal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> Element {
    let mut expanded = use_signal(|| false);
    let summary = use_memo(move || {
        let selected = value.read();
        if selected.is_empty() {
            "All".to_string()
        } else {
            format!("{} selected", selected.len())
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; width: 100%;",
            div {
                style: "font-size: 14px; font-weight: 500; color: #6B7280;",
                "{label}"
            }
            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    width: 100%;
                    border: none;
                    border-bottom: 1px solid #D1D5DB;
                    background: none;
                    color: #111827;
                    font-size: 16px;
                    padding: 4px 0;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let currently_expanded = *expanded.read();
                    expanded.set(!currently_expanded);
                },
                "{summary}"
                div { style: "flex-grow: 1;" }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
            }
            if expanded() {
                ul {
                    style: "
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        max-height: 220px;
                        overflow-y: auto;
                        border: 1px solid #E5E7EB;
                        border-radius: 8px;
                    ",
                    for choice in choices.read().clone() {
                        li {
                            key: "{choice.value}-{choice.label}",
                            MultiSelectChoiceRow {
                                choice: choice.clone(),
                                value: value,
                                on_change: on_change,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MultiSelectChoiceRow(
    choice: FilterOption,
    value: ReadSignal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> Element {
    let choice_value = choice.value.clone();
    let is_checked = use_memo(move || value.read().contains(&choice_value));
    let toggle_value = choice.value.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                align-items: center;
                cursor: pointer;
                padding: 4px 6px;
            ",
            onclick: move |_| {
                let mut selected = value.read().clone();
                if let Some(position) = selected.iter().position(|v| v == &toggle_value) {
                    selected.remove(position);
                } else {
                    selected.push(toggle_value.clone());
                }
                on_change(selected);
            },
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{choice.label}"
            }
        }
    }
}
