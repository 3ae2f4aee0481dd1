use dioxus::prelude::*;

#[component]
pub fn FilterTextField(
    label: ReadSignal<String>,
    value: ReadSignal<String>,
    on_change: Callback<String>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; width: 100%;",
            div {
                style: "font-size: 14px; font-weight: 500; color: #6B7280;",
                "{label}"
            }
            input {
                r#type: "text",
                value: "{value}",
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
                    on_change(event.value());
                },
            }
        }
    }
}
