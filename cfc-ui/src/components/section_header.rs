//! Card section header with an icon and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    /// Emoji shown before the title
    #[props(default = String::new())]
    pub icon: String,
    #[props(default = String::new())]
    pub subtitle: String,
    #[props(default = false)]
    pub centered: bool,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let align = if props.centered { "center" } else { "left" };

    rsx! {
        div {
            style: "margin-bottom: 24px; text-align: {align};",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 28px; font-weight: 700; color: #1B3A2A;",
                if !props.icon.is_empty() {
                    span { style: "margin-right: 10px;", "{props.icon}" }
                }
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
