use common::category::CategorySummary;
use common::product_filters::ProductFilterState;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFolder};

use crate::routes::Route;

#[component]
pub fn CategoryCard(category: ReadSignal<CategorySummary>) -> Element {
    rsx! {
        Link {
            to: Route::category_page_first_page(
                category.read().id.clone(),
                ProductFilterState::default(),
            ),
            div {
                class: "x-category-card",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 260px;
                    padding: 16px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 12px;
                    box-shadow: 0 2px 8px rgba(0,0,0,0.06);
                    color: #111827;
                    cursor: pointer;
                ",
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 36px;
                        height: 36px;
                        border-radius: 10px;
                        background: #EEF2FF;
                        border: 1px solid #C7D2FE;
                        color: #4F46E5;
                        flex-shrink: 0;
                    ",
                    Icon { icon: MdFolder, style: "width: 20px; height: 20px;" }
                }
                div {
                    style: "
                        font-size: 18px;
                        font-weight: 500;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{category.read().name}"
                }
            }
        }
    }
}
