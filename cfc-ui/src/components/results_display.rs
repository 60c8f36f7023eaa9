//! Results card: total, comparison with the average, and the breakdown.

use super::{CategoryBar, SectionHeader};
use cfc_core::format::{format_kg, format_whole};
use cfc_core::presenter::ResultsSummary;
use cfc_core::CalculationResult;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ResultsDisplayProps {
    pub result: CalculationResult,
}

#[component]
pub fn ResultsDisplay(props: ResultsDisplayProps) -> Element {
    let summary = ResultsSummary::from_result(&props.result);
    let total = format_kg(summary.total);
    let reference = format_whole(summary.reference);
    let total_color = summary.rating.color();
    let (trend_icon, trend_color, panel_background) = if summary.is_below_average {
        ("📉", "#2E7D32", "#E8F5E9")
    } else {
        ("📈", "#C62828", "#FFEBEE")
    };
    let message = summary.comparison_message();
    let (headline, body) = summary.encouragement();

    rsx! {
        div {
            style: "padding: 32px; background: rgba(255, 255, 255, 0.85); border: 1px solid #DDE7E0; border-radius: 12px; box-shadow: 0 4px 20px rgba(27, 58, 42, 0.12);",
            div {
                style: "text-align: center; margin-bottom: 32px;",
                SectionHeader {
                    title: "Your Carbon Footprint".to_string(),
                    icon: "🍃".to_string(),
                    centered: true,
                }
                div {
                    style: "font-size: 56px; font-weight: 700; color: {total_color}; margin-bottom: 16px;",
                    "{total}"
                    span { style: "font-size: 28px; margin-left: 8px;", "kg CO₂e" }
                }
                div {
                    style: "font-size: 18px; font-weight: 600; color: {trend_color};",
                    span { style: "margin-right: 8px;", "{trend_icon}" }
                    "{message}"
                }
                p {
                    style: "margin-top: 8px; color: #666;",
                    "(US average: ~{reference} kg CO₂e/month)"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 24px;",
                h3 { style: "margin: 0; font-size: 20px;", "Breakdown by Category" }
                for share in summary.categories.iter().copied() {
                    CategoryBar { key: "{share.category}", share }
                }
            }

            div {
                style: "margin-top: 32px; padding: 24px; border-radius: 8px; background: {panel_background};",
                p {
                    style: "margin: 0; line-height: 1.6;",
                    span { style: "font-weight: 600; color: {trend_color}; margin-right: 6px;", "{headline}" }
                    "{body}"
                }
            }
        }
    }
}
