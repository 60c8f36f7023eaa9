//! Inline error notice.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Short lead-in shown in bold before the message
    #[props(default = "Something went wrong".to_string())]
    pub heading: String,
}

/// Shown in place of a section whose static content failed to load.
/// The calculator itself keeps working.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 16px 20px; background: #FFEBEE; color: #C62828; border-radius: 8px; border: 1px solid #EF9A9A;",
            strong { style: "margin-right: 6px;", "{props.heading}:" }
            "{props.message}"
        }
    }
}
