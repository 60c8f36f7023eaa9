//! Display formatting. Rounding happens here and nowhere else.
//!
//! Exact halves round away from zero (0.125 -> "0.13", 98.5 -> "99"), the
//! way a browser's `toFixed` shows them, rather than to even.

fn round_half_away(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Two decimal places, e.g. "588.67".
pub fn format_kg(value: f64) -> String {
    format!("{:.2}", round_half_away(value, 2))
}

/// One decimal place, e.g. "46.9".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", round_half_away(value, 1))
}

pub fn format_whole(value: f64) -> String {
    format!("{:.0}", round_half_away(value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(588.674), "588.67");
        assert_eq!(format_kg(0.024), "0.02");
        assert_eq!(format_kg(0.0), "0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(46.88), "46.9");
        assert_eq!(format_percent(0.0), "0.0");
        assert_eq!(format_percent(0.25), "0.3");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(format_whole(63.2), "63");
        assert_eq!(format_whole(100.0), "100");
    }

    #[test]
    fn test_exact_halves_round_up() {
        assert_eq!(format_kg(0.125), "0.13");
        assert_eq!(format_whole(98.5), "99");
        assert_eq!(format_whole(0.5), "1");
        assert_eq!(format_whole(2.5), "3");
    }
}
