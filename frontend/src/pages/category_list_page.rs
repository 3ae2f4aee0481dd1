//! Root category listing page.

use dioxus::prelude::*;

use crate::{
    api::category_api::root_category_children,
    components::{
        catalog_components::category_card::CategoryCard,
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
};


#[component]
pub fn CategoryListPage() -> Element {
    rsx! {
        Title { "Storefront Admin - Categories" }
        div {
            id: "x-category-list-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            h1 {
                style: "font-size: 28px; font-weight: 500; color: #0F172A; margin: 0;",
                "Categories"
            }
            SuspendWrapper { CategoryListView {} }
        }
    }
}

#[component]
fn CategoryListView() -> Element {
    let categories_resource = use_resource(move || root_category_children());
    let categories = categories_resource.suspend()?.cloned();
    let categories = match categories {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(c) => c,
    };

    if categories.is_empty() {
        return rsx! {
            div {
                style: "font-size: 18px; color: #6B7280;",
                "No categories yet."
            }
        };
    }

    rsx! {
        ul {
            id: "x-category-list-grid",
            style: "
                list-style: none;
                margin: 0;
                padding: 0;
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 14px;
            ",
            for category in categories {
                li {
                    key: "{category.id}",
                    CategoryCard { category: category.clone() }
                }
            }
        }
    }
}
