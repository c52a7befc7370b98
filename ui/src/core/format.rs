//! Formatting helpers for chart labels and tooltip rows.

/// Whole-number percentage of `value` in `total`; zero when `total` is zero.
pub fn share_percent(value: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(value) / f64::from(total) * 100.0).round() as u32
}

pub fn format_percent(value: impl std::fmt::Display) -> String {
    format!("{value}%")
}

/// One decimal place, with a trailing `.0` dropped (`4.0` → `4`, `4.2` → `4.2`).
pub fn format_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// Signed score as shown on gauges (`48`, `-12`).
pub fn format_score(value: f64) -> String {
    let rounded = value.round();
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(share_percent(12, 0), 0);
        assert_eq!(share_percent(16, 480), 3);
        assert_eq!(share_percent(1, 2), 50);
    }

    #[test]
    fn decimals_drop_trailing_zero() {
        assert_eq!(format_decimal(4.0), "4");
        assert_eq!(format_decimal(4.2), "4.2");
        assert_eq!(format_decimal(8.44), "8.4");
    }

    #[test]
    fn scores_round_to_whole_numbers() {
        assert_eq!(format_score(47.6), "48");
        assert_eq!(format_score(-12.2), "-12");
        assert_eq!(format_percent(72), "72%");
    }
}
