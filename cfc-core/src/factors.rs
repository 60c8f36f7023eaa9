//! Fixed emission factors and the comparison baseline.
//!
//! Factors are illustrative, in kg CO2-equivalent per unit of the matching
//! activity quantity.

use crate::activity::ActivityField;
use serde::Serialize;

/// Approximate US average footprint, kg CO2e per month.
///
/// Only used for comparison display, never in the calculation.
pub const AVERAGE_MONTHLY_FOOTPRINT_KG: f64 = 1600.0;

/// Per-unit conversion constants, one per activity field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactors {
    /// per kWh
    pub electricity: f64,
    /// per mile
    pub car_miles: f64,
    /// per mile
    pub public_transport: f64,
    /// per meal
    pub meat_meals: f64,
    /// per meal
    pub veg_meals: f64,
    /// per gallon
    pub water: f64,
    /// per kg
    pub waste: f64,
}

impl EmissionFactors {
    pub const STANDARD: EmissionFactors = EmissionFactors {
        electricity: 0.92,
        car_miles: 0.404,
        public_transport: 0.14,
        meat_meals: 6.61,
        veg_meals: 2.0,
        water: 0.0003,
        waste: 0.57,
    };

    pub fn factor(&self, field: ActivityField) -> f64 {
        match field {
            ActivityField::Electricity => self.electricity,
            ActivityField::CarMiles => self.car_miles,
            ActivityField::PublicTransport => self.public_transport,
            ActivityField::MeatMeals => self.meat_meals,
            ActivityField::VegMeals => self.veg_meals,
            ActivityField::Water => self.water,
            ActivityField::Waste => self.waste,
        }
    }

    /// Unit the factor is expressed against, e.g. "kWh".
    pub fn unit(field: ActivityField) -> &'static str {
        match field {
            ActivityField::Electricity => "kWh",
            ActivityField::CarMiles | ActivityField::PublicTransport => "mile",
            ActivityField::MeatMeals | ActivityField::VegMeals => "meal",
            ActivityField::Water => "gallon",
            ActivityField::Waste => "kg",
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_factors() {
        let factors = EmissionFactors::default();
        assert_eq!(factors.factor(ActivityField::Electricity), 0.92);
        assert_eq!(factors.factor(ActivityField::CarMiles), 0.404);
        assert_eq!(factors.factor(ActivityField::PublicTransport), 0.14);
        assert_eq!(factors.factor(ActivityField::MeatMeals), 6.61);
        assert_eq!(factors.factor(ActivityField::VegMeals), 2.0);
        assert_eq!(factors.factor(ActivityField::Water), 0.0003);
        assert_eq!(factors.factor(ActivityField::Waste), 0.57);
    }

    #[test]
    fn test_factors_are_positive() {
        for field in ActivityField::ALL {
            assert!(EmissionFactors::STANDARD.factor(field) > 0.0);
        }
    }
}
