//! Core of the carbon footprint calculator.
//!
//! Converts monthly/weekly lifestyle activity quantities into an estimated
//! monthly footprint in kg CO2e, broken down into five categories, and
//! derives the figures shown next to the result.
//!
//! - `activity`: the seven activity quantities and the parse-or-zero rule
//! - `factors`: fixed emission factors and the reference average
//! - `calculator`: the emissions calculation
//! - `collector`: per-session input state behind the form
//! - `presenter`: comparison and per-category percentages
//! - `tips`: static reduction tips
//!
//! # Usage
//!
//! ```rust
//! use cfc_core::activity::ActivityField;
//! use cfc_core::collector::InputCollector;
//! use cfc_core::presenter::ResultsSummary;
//!
//! let mut collector = InputCollector::new();
//! collector.set_field(ActivityField::Electricity, "300");
//! collector.set_field(ActivityField::CarMiles, "oops");
//!
//! let result = collector.compute();
//! assert!((result.breakdown.electricity - 276.0).abs() < 1e-9);
//! assert_eq!(result.breakdown.transportation, 0.0);
//!
//! let summary = ResultsSummary::from_result(&result);
//! assert!(summary.is_below_average);
//! ```

pub mod activity;
pub mod breakdown;
pub mod calculator;
pub mod collector;
pub mod error;
pub mod factors;
pub mod format;
pub mod presenter;
pub mod tips;

pub use breakdown::{CalculationResult, Category, EmissionBreakdown};
pub use calculator::calculate;
