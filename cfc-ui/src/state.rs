//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cfc_core::activity::ActivityField;
use cfc_core::collector::InputCollector;
use cfc_core::tips::Tip;
use cfc_core::CalculationResult;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Activity quantities entered so far
    pub collector: Signal<InputCollector>,
    /// Latest calculation; None until the first one
    pub result: Signal<Option<CalculationResult>>,
    /// Reduction tips, loaded once on mount
    pub tips: Signal<Vec<Tip>>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            collector: Signal::new(InputCollector::new()),
            result: Signal::new(None),
            tips: Signal::new(Vec::new()),
            error_msg: Signal::new(None),
        }
    }

    pub fn set_field(&mut self, field: ActivityField, raw: &str) {
        self.collector.write().set_field(field, raw);
    }

    /// Compute from the current inputs and replace any previous result.
    pub fn calculate(&mut self) -> CalculationResult {
        let result = self.collector.read().compute();
        self.result.set(Some(result));
        result
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
