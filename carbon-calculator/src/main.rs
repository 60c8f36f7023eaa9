//! Carbon Footprint Calculator
//!
//! Single-page Dioxus app: the user enters monthly and weekly activity
//! quantities, clicks once to calculate, and sees the estimated monthly
//! footprint broken down by category next to the US average. Reduction tips
//! are always shown below.
//!
//! Data flow:
//! 1. On mount, the embedded tips table is parsed into `AppState.tips`.
//! 2. Each input edit coerces its text and stores it in `AppState.collector`.
//! 3. The calculate button computes once and replaces `AppState.result`,
//!    then scrolls the results section into view.

use cfc_ui::components::{
    CalculatorForm, ErrorDisplay, PageFooter, PageHeader, ReductionTips, ResultsDisplay,
};
use cfc_ui::js_bridge;
use cfc_ui::state::AppState;
use cfc_ui::RESULTS_SECTION_ID;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("carbon-calculator-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the static tips table once on mount
    use_effect(move || match cfc_core::tips::reduction_tips() {
        Ok(tips) => {
            js_bridge::console_log(&format!("[CFC Debug] Loaded {} reduction tips", tips.len()));
            state.tips.set(tips);
        }
        Err(e) => {
            log::error!("Failed to load reduction tips: {}", e);
            state
                .error_msg
                .set(Some(format!("could not read the tips table ({})", e)));
        }
    });

    let result = (state.result)();
    let tips = state.tips.read().clone();

    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(180deg, #F4F8F5 0%, #EAF1EC 100%); font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #1B3A2A;",

            PageHeader {}

            main {
                style: "max-width: 1200px; margin: 0 auto; padding: 48px 16px; display: flex; flex-direction: column; gap: 48px;",

                section { CalculatorForm {} }

                if let Some(result) = result {
                    section {
                        id: RESULTS_SECTION_ID,
                        style: "scroll-margin-top: 80px;",
                        ResultsDisplay { result }
                    }
                }

                section {
                    if let Some(err) = (state.error_msg)() {
                        ErrorDisplay { heading: "Tips unavailable".to_string(), message: err }
                    } else {
                        ReductionTips { tips }
                    }
                }
            }

            PageFooter {}
        }
    }
}
