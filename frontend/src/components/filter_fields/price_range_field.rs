use dioxus::prelude::*;

/// Paired minimum/maximum inputs. Values stay raw strings; whatever reads
/// the committed filter decides what they mean.
#[component]
pub fn PriceRangeField(
    label: ReadSignal<String>,
    currency_symbol: ReadSignal<String>,
    min_value: ReadSignal<String>,
    max_value: ReadSignal<String>,
    on_change_min: Callback<String>,
    on_change_max: Callback<String>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; width: 100%;",
            div {
                style: "font-size: 14px; font-weight: 500; color: #6B7280;",
                "{label} ({currency_symbol})"
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 10px;
                    width: 100%;
                ",
                input {
                    r#type: "text",
                    placeholder: "Min",
                    value: "{min_value}",
                    style: PRICE_INPUT_STYLE,
                    oninput: move |event: Event<FormData>| {
                        on_change_min(event.value());
                    },
                }
                span { style: "color: #6B7280;", "-" }
                input {
                    r#type: "text",
                    placeholder: "Max",
                    value: "{max_value}",
                    style: PRICE_INPUT_STYLE,
                    oninput: move |event: Event<FormData>| {
                        on_change_max(event.value());
                    },
                }
            }
        }
    }
}

const PRICE_INPUT_STYLE: &str = "
    flex: 1;
    min-width: 0;
    border: none;
    border-bottom: 1px solid #D1D5DB;
    outline: none;
    background: transparent;
    color: #111827;
    font-size: 16px;
    padding: 4px 0;
";
