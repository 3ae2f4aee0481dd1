//! Category screen: details, child categories and the filtered product
//! list.

use dioxus::prelude::*;

use common::catalog_const::PRODUCT_PAGE_SIZE;
use common::product_filters::{FilterSubmission, ProductFilterState};
use crate::{
    api::{category_api::category_properties, product_type_api::product_type_list},
    components::{
        catalog_components::{
            product_card::ProductCard, product_filters::ProductFilters,
            product_list_controls::ProductListControls,
        },
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_param::UrlParam,
    routes::Route,
};


#[component]
pub fn CategoryPage(
    id: String,
    filters: UrlParam<ProductFilterState>,
    after: UrlParam<Option<String>>,
) -> Element {
    rsx! {
        Title { "Storefront Admin - Category" }
        CategoryPageRootComponent {
            id: id.clone(),
            filters: filters.0.clone(),
            after: after.0.clone(),
        }
    }
}

#[component]
fn CategoryPageRootComponent(
    id: ReadSignal<String>,
    filters: ReadSignal<ProductFilterState>,
    after: ReadSignal<Option<String>>,
) -> Element {
    rsx! {
        div {
            id: "x-category-page-root",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
                gap: 16px;
                padding: 16px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            div {
                id: "x-category-page-products-panel",
                style: "
                    flex-grow: 1;
                    min-width: 400px;
                    display: flex;
                    flex-direction: column;
                ",
                SuspendWrapper { CategoryPropertiesView { id: id, filters: filters, after: after } }
            }
            div {
                id: "x-category-page-filters-panel",
                style: "width: 300px; flex-shrink: 0;",
                SuspendWrapper { CategoryFilterPanel { id: id, filters: filters } }
            }
        }
    }
}

#[component]
fn CategoryPropertiesView(
    id: ReadSignal<String>,
    filters: ReadSignal<ProductFilterState>,
    after: ReadSignal<Option<String>>,
) -> Element {
    let mut properties_resource = use_resource(move || {
        let id = id.read().clone();
        let after = after.read().clone();
        category_properties(id, PRODUCT_PAGE_SIZE, after)
    });
    // when the category or cursor changes, we need to restart the resource
    use_effect(move || {
        let _ = id.read();
        let _ = after.read();
        properties_resource.clear();
        properties_resource.restart();
    });

    let properties = properties_resource.suspend()?.cloned();
    let properties = match properties {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(p) => p,
    };

    let details = properties.details.clone();
    let children_list = properties.children.clone();
    let products = properties.products.clone();
    let end_cursor = products.page_info.end_cursor.clone();
    let at_first_page = after.read().is_none();
    // a next page needs both the flag and a cursor to follow
    let has_next_page = products.page_info.has_next_page && end_cursor.is_some();

    let on_first_page = Callback::new(move |_: ()| {
        navigator().push(Route::category_page_first_page(
            id.read().clone(),
            filters.read().clone(),
        ));
    });
    let on_next_page = {
        let end_cursor = end_cursor.clone();
        Callback::new(move |_: ()| {
            navigator().push(Route::CategoryPage {
                id: id.read().clone(),
                filters: UrlParam::from(filters.read().clone()),
                after: UrlParam::from(end_cursor.clone()),
            });
        })
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
            h1 {
                style: "font-size: 28px; font-weight: 500; color: #0F172A; margin: 0;",
                "{details.name}"
            }
            Link {
                to: Route::CategoryEditPage { id: details.id.clone() },
                span {
                    style: "
                        font-size: 14px;
                        color: #4F46E5;
                        border: 1px solid #C7D2FE;
                        border-radius: 8px;
                        padding: 4px 10px;
                        background: #EEF2FF;
                    ",
                    "Edit"
                }
            }
        }
        if !details.description.is_empty() {
            div {
                style: "font-size: 16px; color: #374151; margin-top: 4px; max-width: 640px;",
                "{details.description}"
            }
        }
        if !children_list.is_empty() {
            div {
                id: "x-category-children-row",
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px; margin-top: 10px;",
                for child in children_list {
                    Link {
                        key: "{child.id}",
                        to: Route::category_page_first_page(child.id.clone(), ProductFilterState::default()),
                        span {
                            style: "
                                font-size: 14px;
                                color: #111827;
                                background: white;
                                border: 1px solid #D1D5DB;
                                border-radius: 1000px;
                                padding: 4px 12px;
                            ",
                            "{child.name}"
                        }
                    }
                }
            }
        }

        ProductListControls {
            total_count: products.total_count,
            at_first_page: at_first_page,
            has_next_page: has_next_page,
            on_first_page: on_first_page,
            on_next_page: on_next_page,
        }

        if products.edges.is_empty() {
            div {
                style: "font-size: 18px; color: #6B7280; padding: 20px;",
                "No products match the current filters."
            }
        } else {
            ul {
                id: "x-category-product-grid",
                style: "
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 14px;
                ",
                for edge in products.edges.iter().cloned() {
                    li {
                        key: "{edge.cursor}-{edge.node.id}",
                        ProductCard { product: edge.node.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryFilterPanel(id: ReadSignal<String>, filters: ReadSignal<ProductFilterState>) -> Element {
    let product_types_resource = use_resource(move || product_type_list());
    let product_types = product_types_resource.suspend()?.cloned();
    let product_types = match product_types {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(list) => list
            .iter()
            .map(|product_type| product_type.summary())
            .collect::<Vec<_>>(),
    };

    // this page is the submission sink: one changed field comes in, gets
    // merged into the committed state and pushed as a fresh first page
    let on_submit = Callback::new(move |submission: FilterSubmission| {
        let mut committed = filters.read().clone();
        committed.apply(&submission.form_data);
        navigator().push(Route::category_page_first_page(id.read().clone(), committed));
    });
    let on_clear = Callback::new(move |_: ()| {
        navigator().push(Route::category_page_first_page(
            id.read().clone(),
            ProductFilterState::default(),
        ));
    });

    rsx! {
        ProductFilters {
            product_types: product_types,
            form_state: Some(filters.read().clone()),
            on_submit: on_submit,
            on_clear: on_clear,
        }
    }
}
