use dioxus::prelude::*;

#[component]
pub fn FormSpacer() -> Element {
    rsx! {
        div { style: "height: 16px; flex-shrink: 0;" }
    }
}
