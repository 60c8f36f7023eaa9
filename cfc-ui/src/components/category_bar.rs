//! One breakdown row: category, value and share of the total.

use cfc_core::format::{format_kg, format_percent};
use cfc_core::presenter::CategoryShare;
use cfc_core::Category;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CategoryBarProps {
    pub share: CategoryShare,
}

fn bar_color(category: Category) -> &'static str {
    match category {
        Category::Electricity | Category::Water => "#F9A825",
        Category::Transportation => "#2E7D32",
        Category::Food => "#00897B",
        Category::Waste => "#78909C",
    }
}

#[component]
pub fn CategoryBar(props: CategoryBarProps) -> Element {
    let share = props.share;
    let category = share.category;
    let value = format_kg(share.value);
    let percentage = format_percent(share.percentage);
    let width = share.percentage.clamp(0.0, 100.0);
    let color = bar_color(category);
    let icon = category.icon();
    let name = category.name();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                span {
                    style: "font-size: 16px; font-weight: 500;",
                    span { style: "font-size: 22px; margin-right: 8px;", "{icon}" }
                    "{name}"
                }
                span {
                    style: "font-size: 16px; font-weight: 600;",
                    "{value} kg CO₂e"
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                div {
                    style: "flex: 1; height: 12px; background: #E8EFEA; border-radius: 6px; overflow: hidden;",
                    div {
                        style: "height: 100%; width: {width}%; background: {color}; transition: width 0.4s;",
                    }
                }
                span {
                    style: "min-width: 48px; text-align: right; font-size: 13px; color: #666;",
                    "{percentage}%"
                }
            }
        }
    }
}
