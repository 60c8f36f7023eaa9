//! Page footer.

use dioxus::prelude::*;

#[component]
pub fn PageFooter() -> Element {
    rsx! {
        footer {
            style: "margin-top: 80px; padding: 32px 16px; text-align: center; border-top: 1px solid #DDE7E0; background: #F1F7F2;",
            div {
                style: "font-size: 18px; font-weight: 600; margin-bottom: 8px;",
                "🍃 Every Action Counts"
            }
            p {
                style: "margin: 0; color: #666;",
                "Small changes in daily habits can make a big difference for our planet"
            }
        }
    }
}
