//! Activity quantities entered by the user.
//!
//! An [`ActivityRecord`] holds seven independent, non-negative quantities.
//! Raw text from an input box goes through [`coerce_quantity`], which never
//! fails: anything that is not a usable number becomes 0.

use crate::error::Error;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Names the seven activity quantities, in form display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityField {
    Electricity,
    CarMiles,
    PublicTransport,
    MeatMeals,
    VegMeals,
    Water,
    Waste,
}

impl ActivityField {
    pub const ALL: [ActivityField; 7] = [
        ActivityField::Electricity,
        ActivityField::CarMiles,
        ActivityField::PublicTransport,
        ActivityField::MeatMeals,
        ActivityField::VegMeals,
        ActivityField::Water,
        ActivityField::Waste,
    ];

    /// camelCase key used by the web form and JSON.
    pub fn key(self) -> &'static str {
        match self {
            ActivityField::Electricity => "electricity",
            ActivityField::CarMiles => "carMiles",
            ActivityField::PublicTransport => "publicTransport",
            ActivityField::MeatMeals => "meatMeals",
            ActivityField::VegMeals => "vegMeals",
            ActivityField::Water => "water",
            ActivityField::Waste => "waste",
        }
    }

    /// snake_case alias accepted from CSV headers.
    pub fn snake_key(self) -> &'static str {
        match self {
            ActivityField::Electricity => "electricity",
            ActivityField::CarMiles => "car_miles",
            ActivityField::PublicTransport => "public_transport",
            ActivityField::MeatMeals => "meat_meals",
            ActivityField::VegMeals => "veg_meals",
            ActivityField::Water => "water",
            ActivityField::Waste => "waste",
        }
    }

    /// Form label including the unit of measure.
    pub fn label(self) -> &'static str {
        match self {
            ActivityField::Electricity => "Electricity Usage (kWh/month)",
            ActivityField::CarMiles => "Car Travel (miles/month)",
            ActivityField::PublicTransport => "Public Transport (miles/month)",
            ActivityField::MeatMeals => "Meat-Based Meals (per week)",
            ActivityField::VegMeals => "Vegetarian Meals (per week)",
            ActivityField::Water => "Water Usage (gallons/day)",
            ActivityField::Waste => "Waste Generated (kg/week)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ActivityField::Electricity => "e.g., 300",
            ActivityField::CarMiles => "e.g., 500",
            ActivityField::PublicTransport => "e.g., 100",
            ActivityField::MeatMeals => "e.g., 10",
            ActivityField::VegMeals => "e.g., 11",
            ActivityField::Water => "e.g., 80",
            ActivityField::Waste => "e.g., 15",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActivityField::Electricity => "⚡",
            ActivityField::CarMiles => "🚗",
            ActivityField::PublicTransport => "🚌",
            ActivityField::MeatMeals => "🍖",
            ActivityField::VegMeals => "🥦",
            ActivityField::Water => "💧",
            ActivityField::Waste => "🗑️",
        }
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActivityField {
    type Err = Error;

    /// Accepts either the camelCase key or the snake_case alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ActivityField::ALL
            .into_iter()
            .find(|field| field.key() == name || field.snake_key() == name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }
}

/// Seven activity quantities. Every field defaults to 0.
///
/// Deserialized values pass through the same floor as [`ActivityRecord::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityRecord {
    /// kWh per month.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub electricity: f64,
    /// Miles per month.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub car_miles: f64,
    /// Miles per month.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub public_transport: f64,
    /// Meals per week.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub meat_meals: f64,
    /// Meals per week.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub veg_meals: f64,
    /// Gallons per day.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub water: f64,
    /// Kilograms per week.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub waste: f64,
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(non_negative)
}

impl ActivityRecord {
    pub fn get(&self, field: ActivityField) -> f64 {
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

    /// Store a quantity. Negative or non-finite values are floored to 0.
    pub fn set(&mut self, field: ActivityField, value: f64) {
        let value = non_negative(value);
        let slot = match field {
            ActivityField::Electricity => &mut self.electricity,
            ActivityField::CarMiles => &mut self.car_miles,
            ActivityField::PublicTransport => &mut self.public_transport,
            ActivityField::MeatMeals => &mut self.meat_meals,
            ActivityField::VegMeals => &mut self.veg_meals,
            ActivityField::Water => &mut self.water,
            ActivityField::Waste => &mut self.waste,
        };
        *slot = value;
    }
}

/// Parse raw input text into a quantity, falling back to 0.
///
/// Reads the longest leading decimal literal after trimming, so `"12abc"`
/// yields 12 the way a browser's `parseFloat` would. Empty, non-numeric,
/// negative and non-finite input all yield 0.
pub fn coerce_quantity(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let literal = leading_decimal_literal(trimmed);
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        Ok(value) if value == 0.0 => 0.0,
        _ => {
            if !trimmed.is_empty() {
                debug!("Coercing activity input {:?} to 0", raw);
            }
            0.0
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Leading `[+-]?digits[.digits][(e|E)[+-]digits]`; `5.` and `.5` both count.
static DECIMAL_LITERAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").ok()
});

fn leading_decimal_literal(s: &str) -> &str {
    DECIMAL_LITERAL
        .as_ref()
        .and_then(|re| re.find(s))
        .map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_quantity("300"), 300.0);
        assert_eq!(coerce_quantity(" 3.5 "), 3.5);
        assert_eq!(coerce_quantity(".5"), 0.5);
        assert_eq!(coerce_quantity("5."), 5.0);
        assert_eq!(coerce_quantity("+7"), 7.0);
        assert_eq!(coerce_quantity("1e3"), 1000.0);
    }

    #[test]
    fn test_coerce_invalid_to_zero() {
        assert_eq!(coerce_quantity(""), 0.0);
        assert_eq!(coerce_quantity("   "), 0.0);
        assert_eq!(coerce_quantity("abc"), 0.0);
        assert_eq!(coerce_quantity("NaN"), 0.0);
        assert_eq!(coerce_quantity("Infinity"), 0.0);
        assert_eq!(coerce_quantity("."), 0.0);
        assert_eq!(coerce_quantity("-"), 0.0);
        assert_eq!(coerce_quantity("1e999"), 0.0);
    }

    #[test]
    fn test_coerce_negative_floors_to_zero() {
        assert_eq!(coerce_quantity("-5"), 0.0);
        assert_eq!(coerce_quantity("-0.25"), 0.0);
        let zero = coerce_quantity("-0");
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn test_coerce_leading_literal() {
        assert_eq!(coerce_quantity("12abc"), 12.0);
        assert_eq!(coerce_quantity("4.5kg"), 4.5);
        assert_eq!(coerce_quantity("2e"), 2.0);
        assert_eq!(coerce_quantity("2e+"), 2.0);
        assert_eq!(coerce_quantity("1,000"), 1.0);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!(
            "carMiles".parse::<ActivityField>().unwrap(),
            ActivityField::CarMiles
        );
        assert_eq!(
            "public_transport".parse::<ActivityField>().unwrap(),
            ActivityField::PublicTransport
        );
        assert_eq!(
            " waste ".parse::<ActivityField>().unwrap(),
            ActivityField::Waste
        );
        assert_eq!(
            "gasoline".parse::<ActivityField>(),
            Err(Error::UnknownField("gasoline".to_string()))
        );
    }

    #[test]
    fn test_field_keys_are_unique() {
        for (i, a) in ActivityField::ALL.iter().enumerate() {
            for b in &ActivityField::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.snake_key(), b.snake_key());
            }
        }
    }

    #[test]
    fn test_record_defaults_to_zero() {
        let record = ActivityRecord::default();
        for field in ActivityField::ALL {
            assert_eq!(record.get(field), 0.0);
        }
    }

    #[test]
    fn test_record_set_and_get() {
        let mut record = ActivityRecord::default();
        record.set(ActivityField::VegMeals, 11.0);
        record.set(ActivityField::Water, -3.0);
        record.set(ActivityField::Waste, f64::NAN);
        assert_eq!(record.veg_meals, 11.0);
        assert_eq!(record.get(ActivityField::VegMeals), 11.0);
        assert_eq!(record.water, 0.0);
        assert_eq!(record.waste, 0.0);
    }

    #[test]
    fn test_record_deserializes_partial_json() {
        let record: ActivityRecord =
            serde_json::from_str(r#"{"carMiles": 500, "meatMeals": 10}"#).unwrap();
        assert_eq!(record.car_miles, 500.0);
        assert_eq!(record.meat_meals, 10.0);
        assert_eq!(record.electricity, 0.0);
    }

    #[test]
    fn test_record_deserialize_floors_negative() {
        let record: ActivityRecord =
            serde_json::from_str(r#"{"carMiles": -5, "water": 80}"#).unwrap();
        assert_eq!(record.car_miles, 0.0);
        assert_eq!(record.water, 80.0);
        assert!(record.car_miles.is_sign_positive());
    }

    #[test]
    fn test_coerce_ignores_non_ascii_digits() {
        assert_eq!(coerce_quantity("٣"), 0.0);
        assert_eq!(coerce_quantity("7٣"), 7.0);
    }
}
