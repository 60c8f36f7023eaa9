//! Shared Dioxus components and JS bridge for the carbon footprint calculator.
//!
//! This crate provides:
//! - `js_bridge`: small wrappers around `js_sys::eval()` and `web_sys`
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components for the form, results and tips

pub mod js_bridge;
pub mod state;
pub mod components;

/// DOM id of the results section, the scroll target after a calculation.
pub const RESULTS_SECTION_ID: &str = "results";

/// Delay before scrolling, giving the results section time to render.
pub const SCROLL_DELAY_MS: u32 = 100;
