//! Single calculation from command-line arguments.

use cfc_core::activity::{ActivityField, ActivityRecord};
use cfc_core::collector::InputCollector;
use cfc_core::format::{format_kg, format_percent, format_whole};
use cfc_core::presenter::ResultsSummary;
use cfc_core::CalculationResult;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

/// Raw activity values. Each is coerced to a non-negative number; anything
/// unparseable counts as 0.
#[derive(Args, Debug, Default, Clone)]
pub struct ActivityArgs {
    /// Electricity usage, kWh per month
    #[arg(long, allow_hyphen_values = true)]
    pub electricity: Option<String>,

    /// Car travel, miles per month
    #[arg(long, allow_hyphen_values = true)]
    pub car_miles: Option<String>,

    /// Public transport, miles per month
    #[arg(long, allow_hyphen_values = true)]
    pub public_transport: Option<String>,

    /// Meat-based meals per week
    #[arg(long, allow_hyphen_values = true)]
    pub meat_meals: Option<String>,

    /// Vegetarian meals per week
    #[arg(long, allow_hyphen_values = true)]
    pub veg_meals: Option<String>,

    /// Water usage, gallons per day
    #[arg(long, allow_hyphen_values = true)]
    pub water: Option<String>,

    /// Waste generated, kg per week
    #[arg(long, allow_hyphen_values = true)]
    pub waste: Option<String>,
}

impl ActivityArgs {
    fn raw(&self, field: ActivityField) -> Option<&str> {
        let value = match field {
            ActivityField::Electricity => &self.electricity,
            ActivityField::CarMiles => &self.car_miles,
            ActivityField::PublicTransport => &self.public_transport,
            ActivityField::MeatMeals => &self.meat_meals,
            ActivityField::VegMeals => &self.veg_meals,
            ActivityField::Water => &self.water,
            ActivityField::Waste => &self.waste,
        };
        value.as_deref()
    }

    /// Feed every supplied value through an `InputCollector`.
    pub fn collect(&self) -> InputCollector {
        let mut collector = InputCollector::new();
        for field in ActivityField::ALL {
            if let Some(raw) = self.raw(field) {
                collector.set_field(field, raw);
            }
        }
        collector
    }
}

#[derive(Serialize)]
struct Report<'a> {
    activities: &'a ActivityRecord,
    result: &'a CalculationResult,
    summary: &'a ResultsSummary,
}

pub fn run_calculate(args: &ActivityArgs, json: bool) -> anyhow::Result<()> {
    let collector = args.collect();
    let result = collector.compute();
    let summary = ResultsSummary::from_result(&result);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let report = Report {
            activities: collector.record(),
            result: &result,
            summary: &summary,
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_report(&summary, &mut out)?;
    }
    Ok(())
}

/// Human-readable breakdown, one category per line.
pub fn write_report<W: Write>(summary: &ResultsSummary, out: &mut W) -> io::Result<()> {
    writeln!(out, "Your Carbon Footprint")?;
    writeln!(out)?;
    for share in &summary.categories {
        writeln!(
            out,
            "  {} {:<16} {:>10} kg CO₂e  {:>5}%",
            share.category.icon(),
            share.category.name(),
            format_kg(share.value),
            format_percent(share.percentage)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "  Total: {} kg CO₂e per month", format_kg(summary.total))?;
    writeln!(
        out,
        "  {} (US average: ~{} kg CO₂e/month)",
        summary.comparison_message(),
        format_whole(summary.reference)
    )?;
    let (headline, body) = summary.encouragement();
    writeln!(out)?;
    writeln!(out, "{} {}", headline, body)?;
    Ok(())
}
