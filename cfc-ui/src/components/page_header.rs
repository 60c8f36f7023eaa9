//! Hero banner at the top of the page.

use dioxus::prelude::*;

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; min-height: 360px; padding: 0 16px; color: white; background: linear-gradient(180deg, #2E7D32 0%, #43A047 60%, #F4F8F5 100%);",
            div { style: "font-size: 56px; margin-bottom: 16px;", "🌍 🍃" }
            h1 {
                style: "margin: 0 0 16px 0; font-size: 52px; font-weight: 700;",
                "Carbon Footprint Calculator"
            }
            p {
                style: "margin: 0; max-width: 640px; font-size: 20px; opacity: 0.9;",
                "Measure your environmental impact and discover how to live more sustainably"
            }
        }
    }
}
