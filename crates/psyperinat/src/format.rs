//! Currency and percentage formatting, French conventions
//!
//! The core returns raw full-precision numbers; everything here is
//! presentation-only. Amounts are rounded to whole euros with spaces as
//! thousands separators ("12 345 €"), the compact form steps through
//! k€ / M€ / Md€.

/// Format a currency value rounded to whole euros, e.g. "12 345 €"
pub fn format_eur(value: f64) -> String {
    let euros = value.abs().round() as i64;

    // Insert thousands separators manually
    let digits = euros.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if value < 0.0 {
        format!("-{grouped} €")
    } else {
        format!("{grouped} €")
    }
}

/// Format a currency value in compact form, e.g. "1.25 Md€", "450 k€"
pub fn format_compact_eur(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs >= 1_000_000_000.0 {
        format!("{}{:.2} Md€", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}{:.1} M€", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{:.0} k€", sign, abs / 1_000.0)
    } else {
        format!("{}{:.0} €", sign, abs)
    }
}

/// Format a fraction as a percentage, e.g. "61.4 %"
pub fn format_pct(fraction: f64) -> String {
    format!("{:.1} %", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eur_groups_thousands_with_spaces() {
        assert_eq!(format_eur(0.0), "0 €");
        assert_eq!(format_eur(999.4), "999 €");
        assert_eq!(format_eur(1_000.0), "1 000 €");
        assert_eq!(format_eur(1_234_567.8), "1 234 568 €");
        assert_eq!(format_eur(-1_234.0), "-1 234 €");
    }

    #[test]
    fn compact_eur_steps_through_magnitudes() {
        assert_eq!(format_compact_eur(42.0), "42 €");
        assert_eq!(format_compact_eur(4_700.0), "5 k€");
        assert_eq!(format_compact_eur(2_100_000.0), "2.1 M€");
        assert_eq!(format_compact_eur(1_250_000_000.0), "1.25 Md€");
        assert_eq!(format_compact_eur(-2_000_000.0), "-2.0 M€");
    }

    #[test]
    fn pct_formats_fractions() {
        assert_eq!(format_pct(0.614), "61.4 %");
        assert_eq!(format_pct(1.0), "100.0 %");
        assert_eq!(format_pct(0.0), "0.0 %");
    }
}
