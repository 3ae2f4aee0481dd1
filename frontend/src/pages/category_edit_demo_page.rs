//! Fixture gallery for the category edit form, one section per state.

use dioxus::prelude::*;

use common::category::CategoryDetails;
use crate::{
    components::catalog_components::category_edit_form::{CategoryEditForm, FormError},
    data_definitions::fixtures::{category_fixture, category_form_errors},
};


#[component]
pub fn CategoryEditDemoPage() -> Element {
    let on_back = Callback::new(move |_: ()| {});
    let on_submit = Callback::new(move |_: CategoryDetails| {});

    rsx! {
        Title { "Storefront Admin - Component Demos" }
        div {
            id: "x-demo-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 28px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            h1 {
                style: "font-size: 28px; font-weight: 500; color: #0F172A; margin: 0;",
                "Category edit"
            }

            DemoSection {
                label: "default",
                CategoryEditForm {
                    category: category_fixture(""),
                    disabled: false,
                    errors: Vec::<FormError>::new(),
                    on_back: on_back,
                    on_submit: on_submit,
                }
            }

            DemoSection {
                label: "when loading",
                CategoryEditForm {
                    category: category_fixture(""),
                    disabled: true,
                    errors: Vec::<FormError>::new(),
                    on_back: on_back,
                    on_submit: on_submit,
                }
            }

            DemoSection {
                label: "with errors",
                CategoryEditForm {
                    category: category_fixture(""),
                    disabled: false,
                    errors: category_form_errors(),
                    on_back: on_back,
                    on_submit: on_submit,
                }
            }
        }
    }
}

#[component]
fn DemoSection(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            div {
                style: "font-size: 16px; font-weight: 500; color: #6B7280;",
                "{label}"
            }
            {children}
        }
    }
}
