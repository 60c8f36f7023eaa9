//! Per-category emissions and the result of one calculation.

use crate::activity::ActivityField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five breakdown categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Electricity,
    Transportation,
    Food,
    Water,
    Waste,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electricity,
        Category::Transportation,
        Category::Food,
        Category::Water,
        Category::Waste,
    ];

    /// The category an activity quantity is aggregated into.
    pub fn for_field(field: ActivityField) -> Category {
        match field {
            ActivityField::Electricity => Category::Electricity,
            ActivityField::CarMiles | ActivityField::PublicTransport => Category::Transportation,
            ActivityField::MeatMeals | ActivityField::VegMeals => Category::Food,
            ActivityField::Water => Category::Water,
            ActivityField::Waste => Category::Waste,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Transportation => "transportation",
            Category::Food => "food",
            Category::Water => "water",
            Category::Waste => "waste",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Transportation => "Transportation",
            Category::Food => "Food",
            Category::Water => "Water",
            Category::Waste => "Waste",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Electricity => "⚡",
            Category::Transportation => "🚗",
            Category::Food => "🍽️",
            Category::Water => "💧",
            Category::Waste => "🗑️",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emissions per category, kg CO2e. Always recomputed, never edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub electricity: f64,
    pub transportation: f64,
    pub food: f64,
    pub water: f64,
    pub waste: f64,
}

impl EmissionBreakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.electricity,
            Category::Transportation => self.transportation,
            Category::Food => self.food,
            Category::Water => self.water,
            Category::Waste => self.waste,
        }
    }

    pub(crate) fn add(&mut self, category: Category, amount: f64) {
        let slot = match category {
            Category::Electricity => &mut self.electricity,
            Category::Transportation => &mut self.transportation,
            Category::Food => &mut self.food,
            Category::Water => &mut self.water,
            Category::Waste => &mut self.waste,
        };
        *slot += amount;
    }

    /// Sum of all five categories.
    pub fn total(&self) -> f64 {
        Category::ALL
            .iter()
            .fold(0.0, |sum, category| sum + self.get(*category))
    }

    /// (category, value) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// One calculation: the breakdown and its total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total: f64,
    pub breakdown: EmissionBreakdown,
}

impl From<EmissionBreakdown> for CalculationResult {
    fn from(breakdown: EmissionBreakdown) -> Self {
        CalculationResult {
            total: breakdown.total(),
            breakdown,
        }
    }
}
