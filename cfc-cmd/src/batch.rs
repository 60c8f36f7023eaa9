//! Batch calculation over a CSV of activity quantities.
//!
//! Input header cells name activity fields; columns that are absent count
//! as 0 for every row, and each row is calculated independently. Output is
//! one CSV row per input row.

use cfc_core::activity::ActivityField;
use cfc_core::collector::InputCollector;
use cfc_core::presenter::ResultsSummary;
use csv::{ReaderBuilder, Writer};
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read, Write};

/// One output row. `row` is 1-based and counts data rows only.
#[derive(Debug, Serialize, PartialEq)]
pub struct BatchRow {
    pub row: usize,
    pub electricity: f64,
    pub transportation: f64,
    pub food: f64,
    pub water: f64,
    pub waste: f64,
    pub total: f64,
    pub percent_of_average: f64,
}

/// Run a batch from `input_path`, writing to `output_path` or stdout.
pub fn run_batch(input_path: &str, output_path: Option<&str>) -> anyhow::Result<()> {
    let input = File::open(input_path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", input_path, e))?;

    let rows = match output_path {
        Some(path) => {
            let output = File::create(path)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path, e))?;
            calculate_batch(input, output)?
        }
        None => calculate_batch(input, io::stdout().lock())?,
    };

    info!(
        "Batch complete: {} rows from {} to {}",
        rows,
        input_path,
        output_path.unwrap_or("stdout")
    );
    Ok(())
}

/// Parse the header row into activity fields.
fn header_fields(headers: &csv::StringRecord) -> anyhow::Result<Vec<ActivityField>> {
    headers
        .iter()
        .map(|name| {
            name.parse::<ActivityField>()
                .map_err(|e| anyhow::anyhow!("Invalid batch header: {}", e))
        })
        .collect()
}

/// Calculate every row of `input` and write the results to `output`.
///
/// Returns the number of data rows processed.
pub fn calculate_batch<R: Read, W: Write>(input: R, output: W) -> anyhow::Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    let fields = header_fields(rdr.headers()?)?;

    let mut wtr = Writer::from_writer(output);
    let mut count = 0;
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        let row = index + 1;
        if record.len() != fields.len() {
            warn!(
                "Row {} has {} values for {} columns; missing values count as 0",
                row,
                record.len(),
                fields.len()
            );
        }

        let mut collector = InputCollector::new();
        for (field, raw) in fields.iter().zip(record.iter()) {
            collector.set_field(*field, raw);
        }
        wtr.serialize(batch_row(row, &collector))?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}

fn batch_row(row: usize, collector: &InputCollector) -> BatchRow {
    let result = collector.compute();
    let summary = ResultsSummary::from_result(&result);
    let b = result.breakdown;
    BatchRow {
        row,
        electricity: b.electricity,
        transportation: b.transportation,
        food: b.food,
        water: b.water,
        waste: b.waste,
        total: result.total,
        percent_of_average: summary.percent_of_average,
    }
}
