//! Display-ready figures derived from a [`CalculationResult`].
//!
//! Nothing here mutates the result. Percentages are left unrounded;
//! see [`crate::format`] for display precision.

use crate::breakdown::{CalculationResult, Category};
use crate::factors::AVERAGE_MONTHLY_FOOTPRINT_KG;
use crate::format::format_whole;
use serde::Serialize;

/// Colour tier of a footprint relative to the reference average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintRating {
    /// Under half the average.
    Low,
    /// Under the average.
    Moderate,
    /// At or above the average.
    High,
}

impl FootprintRating {
    pub fn classify(total: f64, reference: f64) -> Self {
        if total < reference * 0.5 {
            FootprintRating::Low
        } else if total < reference {
            FootprintRating::Moderate
        } else {
            FootprintRating::High
        }
    }

    /// CSS colour for the headline figure.
    pub fn color(self) -> &'static str {
        match self {
            FootprintRating::Low => "#2E7D32",
            FootprintRating::Moderate => "#00897B",
            FootprintRating::High => "#C62828",
        }
    }
}

/// One row of the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub value: f64,
    /// Share of the total, 0-100. Zero when the total is zero.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub total: f64,
    pub reference: f64,
    pub percent_of_average: f64,
    pub is_below_average: bool,
    pub rating: FootprintRating,
    pub categories: Vec<CategoryShare>,
}

impl ResultsSummary {
    /// Summarize against [`AVERAGE_MONTHLY_FOOTPRINT_KG`].
    pub fn from_result(result: &CalculationResult) -> Self {
        Self::with_reference(result, AVERAGE_MONTHLY_FOOTPRINT_KG)
    }

    pub fn with_reference(result: &CalculationResult, reference: f64) -> Self {
        let total = result.total;
        let categories = result
            .breakdown
            .iter()
            .map(|(category, value)| CategoryShare {
                category,
                value,
                percentage: share_of(value, total),
            })
            .collect();

        ResultsSummary {
            total,
            reference,
            percent_of_average: total / reference * 100.0,
            is_below_average: total < reference,
            rating: FootprintRating::classify(total, reference),
            categories,
        }
    }

    /// e.g. "63% below average!" or "100% above average".
    pub fn comparison_message(&self) -> String {
        if self.is_below_average {
            format!(
                "{}% below average!",
                format_whole(100.0 - self.percent_of_average)
            )
        } else {
            format!(
                "{}% above average",
                format_whole(self.percent_of_average - 100.0)
            )
        }
    }

    /// Headline and body text shown under the breakdown.
    pub fn encouragement(&self) -> (&'static str, &'static str) {
        if self.is_below_average {
            (
                "Great job! 🌱",
                "Your carbon footprint is below average. Keep up the sustainable habits and consider the tips below to reduce it even further.",
            )
        } else {
            (
                "Room for improvement",
                "Your footprint is above average. Check out the tips below to learn how you can reduce your environmental impact.",
            )
        }
    }

    pub fn share(&self, category: Category) -> Option<&CategoryShare> {
        self.categories.iter().find(|s| s.category == category)
    }
}

/// `value / total * 100`, guarded against a zero total.
pub fn share_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}
