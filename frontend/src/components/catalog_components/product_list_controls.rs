//! Header row and cursor pagination controls for the product list.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::md_navigation_icons::{MdArrowBack, MdArrowForward},
};

#[component]
pub fn ProductListControls(
    total_count: ReadSignal<u64>,
    at_first_page: ReadSignal<bool>,
    has_next_page: ReadSignal<bool>,
    on_first_page: Callback<()>,
    on_next_page: Callback<()>,
) -> Element {
    let cannot_go_back = use_memo(move || *at_first_page.read());
    let cannot_go_forward = use_memo(move || !*has_next_page.read());

    rsx! {
        div {
            id: "x-product-list-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
                "{total_count} products found"
            }
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            // cursor pagination: the upstream connection only hands out a
            // forward cursor, so back means back to the start
            NavigationButton {
                icon: MdArrowBack,
                label: "First Page",
                disabled: cannot_go_back(),
                onclick: move |_| { on_first_page(()); }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: cannot_go_forward(),
                onclick: move |_| { on_next_page(()); }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
        }
    }
}
