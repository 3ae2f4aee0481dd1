use dioxus::prelude::*;
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::icons::md_communication_icons::MdChat;
use dioxus_free_icons::Icon;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Storefront Admin - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                CatalogCard {}
                DemoGalleryCard {}
            }

            // Feedback Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                ",
                FeedbackCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color:#4F46E5;", "Storefront Admin!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Manage your shop catalog in one place: browse categories, filter products and keep descriptions up to date."
        }
    }
}

#[component]
fn CatalogCard() -> Element {
    rsx! {
        div {
            id: "x-card-catalog",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 280px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            // Title
            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Categories"
            }

            // Description
            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Walk the category tree, page through each category's products and narrow them down by name, type, price or publishing status."
            }

            // Divider spacing
            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            div {
                style: "display:flex; flex-direction:row;",
                Link {
                    to: Route::CategoryListPage {},
                    span {
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 8px;
                            height: 38px;
                            padding: 0 16px;
                            font-size: 16px;
                            border-radius: 9999px;
                            background: white;
                            color: #111827;
                        ",
                        Icon { icon: MdFolder, style: "width: 20px; height: 20px; color:#4F46E5;" }
                        "Browse Categories"
                    }
                }
            }
        }
    }
}

#[component]
fn DemoGalleryCard() -> Element {
    rsx! {
        div {
            id: "x-card-demo-gallery",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 280px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 26px;
                    font-weight: 500;
                ",
                "Component Demos"
            }

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.6;
                    color: rgba(255,255,255,0.96);
                    max-width: 510px;
                ",
                "Every dashboard form, rendered from fixture data in each of its states. Handy for eyeballing layout changes without a shop backend."
            }

            div { style: "flex-grow: 1;" }

            div {
                style: "display:flex; flex-direction:row;",
                Link {
                    to: Route::CategoryEditDemoPage {},
                    span {
                        style: "
                            display: flex;
                            align-items: center;
                            height: 38px;
                            padding: 0 16px;
                            font-size: 16px;
                            border-radius: 9999px;
                            background: white;
                            color: #111827;
                        ",
                        "Open Gallery"
                    }
                }
            }
        }
    }
}

#[component]
fn FeedbackCard() -> Element {
    rsx! {
        div {
            id: "x-card-feedback",
            style: "
                display:flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 14px;
                width: 520px;
                min-height: 140px;
                border-radius: 16px;
                padding: 18px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",

            // Icon box
            div {
                style: "
                    display:flex;
                    align-items:center;
                    justify-content:center;
                    width: 36px;
                    height: 36px;
                    border-radius: 10px;
                    background: #EEF2FF;
                    border: 1px solid #C7D2FE;
                    color: #4F46E5;
                ",
                Icon { icon: MdChat, style: "width: 20px; height: 20px;" }
            }

            // Text and button
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 16px;
                ",
                div { style: "font-size: 20px; font-weight: 500;", "We'd love to hear from you. Share your ideas, suggestions, or issues to help us improve the dashboard." }

                div {
                    style: "display:flex; flex-direction:row;",
                    button {
                        style: "
                            height: 34px;
                            padding: 0 12px;
                            font-size: 14px;
                            border-radius: 8px;
                            background: white;
                            color: #111827;
                            border: 1px solid #D1D5DB;
                            cursor: pointer;
                        ",
                        "Feedback Form",
                    }
                }
            }
        }
    }
}
