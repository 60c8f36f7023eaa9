//! Input collection for the calculator form.
//!
//! The collector owns the [`ActivityRecord`] for a session. Each edit
//! replaces one field with its coerced value; `compute` runs the
//! calculator once and hands back the result for the caller to store.

use crate::activity::{coerce_quantity, ActivityField, ActivityRecord};
use crate::breakdown::CalculationResult;
use crate::calculator;
use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputCollector {
    record: ActivityRecord,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field with the parse-or-zero value of `raw`.
    pub fn set_field(&mut self, field: ActivityField, raw: &str) {
        self.record.set(field, coerce_quantity(raw));
    }

    /// Like [`set_field`](Self::set_field), resolving the field by name.
    pub fn set_field_by_name(&mut self, name: &str, raw: &str) -> Result<(), Error> {
        let field: ActivityField = name.parse()?;
        self.set_field(field, raw);
        Ok(())
    }

    pub fn value(&self, field: ActivityField) -> f64 {
        self.record.get(field)
    }

    /// Text for the field's input box. Zero shows as empty so the
    /// placeholder is visible.
    pub fn display_value(&self, field: ActivityField) -> String {
        let value = self.record.get(field);
        if value == 0.0 {
            String::new()
        } else {
            value.to_string()
        }
    }

    pub fn record(&self) -> &ActivityRecord {
        &self.record
    }

    /// Run the calculator on the current inputs.
    pub fn compute(&self) -> CalculationResult {
        calculator::calculate(&self.record)
    }
}

impl From<ActivityRecord> for InputCollector {
    fn from(record: ActivityRecord) -> Self {
        InputCollector { record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collector_computes_zero() {
        let collector = InputCollector::new();
        let result = collector.compute();
        assert_eq!(result.total, 0.0);
        assert_eq!(collector.record(), &ActivityRecord::default());
    }

    #[test]
    fn test_set_field_coerces() {
        let mut collector = InputCollector::new();
        collector.set_field(ActivityField::Electricity, "300");
        collector.set_field(ActivityField::CarMiles, "not a number");
        collector.set_field(ActivityField::Waste, "-15");
        assert_eq!(collector.value(ActivityField::Electricity), 300.0);
        assert_eq!(collector.value(ActivityField::CarMiles), 0.0);
        assert_eq!(collector.value(ActivityField::Waste), 0.0);
    }

    #[test]
    fn test_later_edit_replaces_earlier() {
        let mut collector = InputCollector::new();
        collector.set_field(ActivityField::Water, "80");
        collector.set_field(ActivityField::Water, "");
        assert_eq!(collector.value(ActivityField::Water), 0.0);
        collector.set_field(ActivityField::Water, "40");
        assert_eq!(collector.value(ActivityField::Water), 40.0);
    }

    #[test]
    fn test_set_field_by_name() {
        let mut collector = InputCollector::new();
        collector.set_field_by_name("meatMeals", "10").unwrap();
        collector.set_field_by_name("veg_meals", "11").unwrap();
        assert_eq!(collector.record().meat_meals, 10.0);
        assert_eq!(collector.record().veg_meals, 11.0);
        assert!(collector.set_field_by_name("flights", "2").is_err());
    }

    #[test]
    fn test_display_value() {
        let mut collector = InputCollector::new();
        assert_eq!(collector.display_value(ActivityField::Electricity), "");
        collector.set_field(ActivityField::Electricity, "300");
        assert_eq!(collector.display_value(ActivityField::Electricity), "300");
        collector.set_field(ActivityField::Electricity, "2.5");
        assert_eq!(collector.display_value(ActivityField::Electricity), "2.5");
    }

    #[test]
    fn test_compute_matches_calculator() {
        let mut collector = InputCollector::new();
        collector.set_field(ActivityField::CarMiles, "500");
        collector.set_field(ActivityField::PublicTransport, "100");
        let result = collector.compute();
        assert!((result.breakdown.transportation - 216.0).abs() < 1e-9);
        assert_eq!(result, calculator::calculate(collector.record()));
    }
}
