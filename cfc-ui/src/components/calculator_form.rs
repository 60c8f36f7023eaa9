//! The calculator card: seven activity inputs and the trigger button.

use super::{ActivityInput, SectionHeader};
use crate::js_bridge;
use crate::state::AppState;
use crate::{RESULTS_SECTION_ID, SCROLL_DELAY_MS};
use cfc_core::activity::ActivityField;
use dioxus::prelude::*;

/// Collects activity quantities and runs one calculation per click.
#[component]
pub fn CalculatorForm() -> Element {
    let mut state = use_context::<AppState>();

    let on_calculate = move |_: MouseEvent| {
        let result = state.calculate();
        log::info!("Footprint calculated: {:.2} kg CO2e", result.total);
        js_bridge::scroll_into_view(RESULTS_SECTION_ID, SCROLL_DELAY_MS);
    };

    rsx! {
        div {
            style: "padding: 32px; background: rgba(255, 255, 255, 0.85); border: 1px solid #DDE7E0; border-radius: 12px; box-shadow: 0 4px 20px rgba(27, 58, 42, 0.08);",
            SectionHeader {
                title: "Calculate Your Carbon Footprint".to_string(),
                icon: "🍃".to_string(),
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px;",
                for field in ActivityField::ALL {
                    ActivityInput { key: "{field}", field }
                }
            }
            button {
                style: "width: 100%; margin-top: 40px; height: 56px; font-size: 18px; font-weight: 600; color: white; border: none; border-radius: 8px; cursor: pointer; background: linear-gradient(90deg, #2E7D32, #00897B);",
                onclick: on_calculate,
                "Calculate My Impact"
            }
        }
    }
}
