//! Static tips for reducing a footprint.
//!
//! The table lives in `fixtures/tips.csv` and is embedded at compile time.
//! It is independent of the calculation and shown whether or not a result
//! exists.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV: `title,description,impact,icon`.
pub static TIPS_CSV: &str = include_str!("../../fixtures/tips.csv");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub description: String,
    /// Estimated yearly saving, e.g. "Save ~200 kg CO₂e/year".
    pub impact: String,
    pub icon: String,
}

/// Parse the embedded tips table.
pub fn reduction_tips() -> anyhow::Result<Vec<Tip>> {
    parse_tips_csv(TIPS_CSV)
}

pub fn parse_tips_csv(csv_object: &str) -> anyhow::Result<Vec<Tip>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_object.as_bytes());
    let mut tips = Vec::new();
    for row in rdr.deserialize() {
        let tip: Tip = row?;
        tips.push(tip);
    }
    Ok(tips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tips() {
        let tips = reduction_tips().unwrap();
        assert_eq!(tips.len(), 6);
        assert_eq!(tips[0].title, "Switch to LED Bulbs");
        assert_eq!(tips[1].impact, "Save ~1,000+ kg CO₂e/year");
        assert_eq!(tips[2].title, "Walk, Bike, or Carpool");
        assert!(tips.iter().all(|t| !t.description.is_empty()));
    }

    #[test]
    fn test_parse_rejects_short_rows() {
        let csv = "title,description,impact,icon\nOnly a title\n";
        assert!(parse_tips_csv(csv).is_err());
    }
}
