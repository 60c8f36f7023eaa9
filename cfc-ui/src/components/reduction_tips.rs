//! Static tips card, rendered whether or not a result exists.

use super::SectionHeader;
use cfc_core::tips::Tip;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReductionTipsProps {
    pub tips: Vec<Tip>,
}

#[component]
pub fn ReductionTips(props: ReductionTipsProps) -> Element {
    rsx! {
        div {
            style: "padding: 32px; background: rgba(255, 255, 255, 0.85); border: 1px solid #DDE7E0; border-radius: 12px;",
            SectionHeader {
                title: "Ways to Reduce Your Impact".to_string(),
                icon: "💡".to_string(),
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px;",
                for tip in props.tips.iter() {
                    div {
                        key: "{tip.title}",
                        style: "padding: 24px; border-radius: 12px; background: #FAFCFA; border: 1px solid #DDE7E0;",
                        div { style: "font-size: 36px; margin-bottom: 12px;", "{tip.icon}" }
                        h3 { style: "margin: 0 0 12px 0; font-size: 20px;", "{tip.title}" }
                        p { style: "margin: 0 0 16px 0; color: #666; line-height: 1.6;", "{tip.description}" }
                        span {
                            style: "display: inline-block; padding: 6px 14px; border-radius: 999px; background: #E8F5E9; color: #2E7D32; font-size: 13px; font-weight: 600;",
                            "{tip.impact}"
                        }
                    }
                }
            }
        }
    }
}
