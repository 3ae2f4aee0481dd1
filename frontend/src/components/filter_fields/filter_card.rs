use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdRefresh};

/// Card chrome around a stack of filter fields, with the reset action in
/// the header.
#[component]
pub fn FilterCard(on_clear: Callback<()>, children: Element) -> Element {
    rsx! {
        div {
            id: "x-filter-card",
            style: "
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.06);
                padding: 18px;
                display: flex;
                flex-direction: column;
                width: 100%;
            ",
            div {
                id: "x-filter-card-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    margin-bottom: 12px;
                ",
                h2 {
                    style: "font-size: 20px; font-weight: 500; color: #111827; margin: 0;",
                    "Filters"
                }
                div { style: "flex-grow: 1;" }
                button {
                    title: "Reset all filters",
                    style: "border: none; background: none; cursor: pointer; color: #6B7280;",
                    onclick: move |_| {
                        on_clear(());
                    },
                    Icon { icon: MdRefresh, style: "width: 22px; height: 22px;" }
                }
            }
            {children}
        }
    }
}
