//! The emissions calculation.
//!
//! A pure function of an [`ActivityRecord`]: each quantity is multiplied by
//! its factor and summed into its category. Inputs are assumed to be
//! coerced already, so there are no error paths. No rounding happens here.

use crate::activity::{ActivityField, ActivityRecord};
use crate::breakdown::{CalculationResult, Category, EmissionBreakdown};
use crate::factors::EmissionFactors;
use log::info;

/// Calculate emissions with the standard factors.
pub fn calculate(record: &ActivityRecord) -> CalculationResult {
    calculate_with(record, &EmissionFactors::STANDARD)
}

pub fn calculate_with(record: &ActivityRecord, factors: &EmissionFactors) -> CalculationResult {
    let mut breakdown = EmissionBreakdown::default();
    for field in ActivityField::ALL {
        breakdown.add(
            Category::for_field(field),
            record.get(field) * factors.factor(field),
        );
    }
    let result = CalculationResult::from(breakdown);
    info!("Calculated monthly footprint: {:.2} kg CO2e", result.total);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn scenario_a() -> ActivityRecord {
        ActivityRecord {
            electricity: 300.0,
            car_miles: 500.0,
            public_transport: 100.0,
            meat_meals: 10.0,
            veg_meals: 11.0,
            water: 80.0,
            waste: 15.0,
        }
    }

    #[test]
    fn test_all_zero_input() {
        let result = calculate(&ActivityRecord::default());
        assert_eq!(result.total, 0.0);
        for (_, value) in result.breakdown.iter() {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_scenario_a() {
        let result = calculate(&scenario_a());
        let b = result.breakdown;
        assert!((b.electricity - 276.0).abs() < EPSILON);
        assert!((b.transportation - 216.0).abs() < EPSILON);
        assert!((b.food - 88.1).abs() < EPSILON);
        assert!((b.water - 0.024).abs() < EPSILON);
        assert!((b.waste - 8.55).abs() < EPSILON);
        assert!((result.total - 588.674).abs() < EPSILON);
    }

    #[test]
    fn test_single_field_lands_in_its_category() {
        for field in ActivityField::ALL {
            let mut record = ActivityRecord::default();
            record.set(field, 7.0);
            let result = calculate(&record);
            let expected = 7.0 * EmissionFactors::STANDARD.factor(field);
            assert_eq!(result.total, expected, "total for {}", field);
            for (category, value) in result.breakdown.iter() {
                if category == Category::for_field(field) {
                    assert_eq!(value, expected);
                } else {
                    assert_eq!(value, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let record = scenario_a();
        assert_eq!(calculate(&record), calculate(&record));
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let records = [
            scenario_a(),
            ActivityRecord {
                electricity: 1234.5,
                water: 0.1,
                ..Default::default()
            },
            ActivityRecord {
                car_miles: 0.001,
                public_transport: 98765.0,
                veg_meals: 3.0,
                ..Default::default()
            },
        ];
        for record in &records {
            let result = calculate(record);
            let b = result.breakdown;
            let sum = b.electricity + b.transportation + b.food + b.water + b.waste;
            assert!((sum - result.total).abs() < EPSILON);
        }
    }

    #[test]
    fn test_custom_factors() {
        let factors = EmissionFactors {
            electricity: 0.5,
            ..EmissionFactors::STANDARD
        };
        let record = ActivityRecord {
            electricity: 100.0,
            ..Default::default()
        };
        assert_eq!(calculate_with(&record, &factors).total, 50.0);
    }
}
