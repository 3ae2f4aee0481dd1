//! Category edit screen.

use dioxus::prelude::*;

use common::category::CategoryDetails;
use common::product_filters::ProductFilterState;
use crate::{
    api::category_api::category_details,
    components::{
        catalog_components::category_edit_form::{CategoryEditForm, FormError},
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    routes::Route,
};


#[component]
pub fn CategoryEditPage(id: String) -> Element {
    rsx! {
        Title { "Storefront Admin - Edit Category" }
        div {
            id: "x-category-edit-container",
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            SuspendWrapper { CategoryEditView { id: id.clone() } }
        }
    }
}

#[component]
fn CategoryEditView(id: ReadSignal<String>) -> Element {
    let details_resource = use_resource(move || {
        let id = id.read().clone();
        category_details(id)
    });
    let details = details_resource.suspend()?.cloned();
    let details = match details {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(d) => d,
    };

    let on_back = Callback::new(move |_: ()| {
        navigator().push(Route::CategoryListPage {});
    });
    // no mutation layer is wired up; log the edit and go back to the category
    let on_submit = Callback::new(move |updated: CategoryDetails| {
        dioxus::logger::tracing::info!("category edit submitted: {} ({})", updated.name, updated.id);
        navigator().push(Route::category_page_first_page(
            updated.id.clone(),
            ProductFilterState::default(),
        ));
    });

    rsx! {
        CategoryEditForm {
            category: details,
            disabled: false,
            errors: Vec::<FormError>::new(),
            on_back: on_back,
            on_submit: on_submit,
        }
    }
}
