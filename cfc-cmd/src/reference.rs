//! Reference tables: emission factors and reduction tips.

use cfc_core::activity::ActivityField;
use cfc_core::factors::{EmissionFactors, AVERAGE_MONTHLY_FOOTPRINT_KG};
use cfc_core::format::format_whole;
use cfc_core::tips::{reduction_tips, Tip};
use cfc_core::Category;
use std::io::{self, Write};

pub fn run_factors() -> anyhow::Result<()> {
    write_factors(&EmissionFactors::STANDARD, &mut io::stdout().lock())?;
    Ok(())
}

pub fn run_tips() -> anyhow::Result<()> {
    let tips = reduction_tips()?;
    write_tips(&tips, &mut io::stdout().lock())?;
    Ok(())
}

pub fn write_factors<W: Write>(factors: &EmissionFactors, out: &mut W) -> io::Result<()> {
    writeln!(out, "{:<18} {:<16} {:>8}  unit", "field", "category", "factor")?;
    for field in ActivityField::ALL {
        writeln!(
            out,
            "{:<18} {:<16} {:>8}  kg CO₂e per {}",
            field.key(),
            Category::for_field(field).key(),
            factors.factor(field),
            EmissionFactors::unit(field)
        )?;
    }
    writeln!(
        out,
        "\nReference: US average ~{} kg CO₂e/month",
        format_whole(AVERAGE_MONTHLY_FOOTPRINT_KG)
    )?;
    Ok(())
}

pub fn write_tips<W: Write>(tips: &[Tip], out: &mut W) -> io::Result<()> {
    for tip in tips {
        writeln!(out, "{} {}", tip.icon, tip.title)?;
        writeln!(out, "   {}", tip.description)?;
        writeln!(out, "   {}", tip.impact)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_table_lists_every_field() {
        let mut buf = Vec::new();
        write_factors(&EmissionFactors::STANDARD, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for field in ActivityField::ALL {
            assert!(text.contains(field.key()), "missing {}", field);
        }
        assert!(text.contains("0.0003"));
        assert!(text.contains("transportation"));
        assert!(text.contains("~1600 kg"));
    }

    #[test]
    fn test_tips_output() {
        let tips = reduction_tips().unwrap();
        let mut buf = Vec::new();
        write_tips(&tips, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Switch to LED Bulbs"));
        assert!(text.contains("Save ~400 kg CO₂e/year"));
    }
}
