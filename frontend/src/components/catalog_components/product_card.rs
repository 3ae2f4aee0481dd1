use common::category::ProductSummary;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdInsertDriveFile};

#[component]
pub fn ProductCard(product: ReadSignal<ProductSummary>) -> Element {
    rsx! {
        div {
            class: "x-product-card",
            style: "
                display: flex;
                flex-direction: column;
                width: 180px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.06);
                overflow: hidden;
            ",
            if let Some(thumbnail_url) = product.read().thumbnail_url.clone() {
                img {
                    src: "{thumbnail_url}",
                    alt: "{product.read().name}",
                    style: "width: 100%; height: 120px; object-fit: cover; background: #F3F4F6;",
                }
            } else {
                div {
                    style: "
                        width: 100%;
                        height: 120px;
                        background: #F3F4F6;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #9CA3AF;
                    ",
                    Icon { icon: MdInsertDriveFile, style: "width: 36px; height: 36px;" }
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 2px; padding: 10px;",
                div {
                    style: "
                        font-size: 16px;
                        font-weight: 500;
                        color: #111827;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{product.read().name}"
                }
                div {
                    style: "font-size: 14px; color: #6B7280;",
                    "{product.read().price_localized}"
                }
            }
        }
    }
}
