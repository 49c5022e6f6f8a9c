use num_format::{CustomFormat, ToFormattedString as _};

use crate::entities::{LocaleProfile, SymbolPosition};

/// Magnitude rendered without sign or currency symbol.
pub(crate) struct Magnitude {
    pub text: String,
    /// True when the value rounded to zero at the rendered precision, in
    /// which case no minus sign is shown.
    pub is_zero: bool,
}

/// Scale `abs_amount` to integer minor units, rounding ties away from zero.
/// Every format path rounds through here.
///
/// Values above `u128::MAX` minor units saturate.
pub(crate) fn to_minor_units(abs_amount: f64, decimal_places: usize) -> u128 {
    (abs_amount * 10f64.powi(decimal_places as i32)).round() as u128
}

/// Render minor units with '.' as decimal mark, grouping the integer part
/// only when a format is given.
pub(crate) fn render_minor_units(
    minor_units: u128,
    decimal_places: usize,
    grouping: Option<&CustomFormat>,
) -> String {
    let scale = 10u128.pow(decimal_places as u32);
    let integer_part = match grouping {
        Some(format) => (minor_units / scale).to_formatted_string(format),
        None => (minor_units / scale).to_string(),
    };
    if decimal_places == 0 {
        integer_part
    } else {
        format!("{}.{:0decimal_places$}", integer_part, minor_units % scale)
    }
}

/// Render `abs_amount` grouped in thousands with the profile's separator and
/// the profile's number of fractional digits ('.' as decimal mark).
pub(crate) fn grouped_magnitude(abs_amount: f64, profile: &LocaleProfile) -> Magnitude {
    let decimal_places = profile.fraction_digits;
    let minor_units = to_minor_units(abs_amount, decimal_places);
    Magnitude {
        text: render_minor_units(minor_units, decimal_places, Some(&profile.grouping)),
        is_zero: minor_units == 0,
    }
}

/// Combine sign, magnitude and currency symbol, ex. `-$1.50k` or `-2.5B₫`.
/// The minus sign always comes first.
pub(crate) fn with_symbol(negative: bool, magnitude: &str, profile: &LocaleProfile) -> String {
    let sign = if negative { "-" } else { "" };
    match profile.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, profile.symbol, magnitude),
        SymbolPosition::Suffix => format!("{}{}{}", sign, magnitude, profile.symbol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{USD_PROFILE, VND_PROFILE};

    #[test]
    fn test_grouped_magnitude_vnd() {
        assert_eq!(grouped_magnitude(0.0, &VND_PROFILE).text, "0");
        assert_eq!(grouped_magnitude(999.0, &VND_PROFILE).text, "999");
        assert_eq!(grouped_magnitude(1_234_567.4, &VND_PROFILE).text, "1.234.567");
        assert_eq!(grouped_magnitude(999.6, &VND_PROFILE).text, "1.000");
    }

    #[test]
    fn test_grouped_magnitude_usd() {
        assert_eq!(grouped_magnitude(0.0, &USD_PROFILE).text, "0.00");
        assert_eq!(grouped_magnitude(0.05, &USD_PROFILE).text, "0.05");
        assert_eq!(grouped_magnitude(1_234.5, &USD_PROFILE).text, "1,234.50");
        assert_eq!(grouped_magnitude(999.999, &USD_PROFILE).text, "1,000.00");
    }

    #[test]
    fn test_zero_detection_uses_rendered_precision() {
        assert!(grouped_magnitude(0.4, &VND_PROFILE).is_zero);
        assert!(!grouped_magnitude(0.4, &USD_PROFILE).is_zero);
        assert!(grouped_magnitude(0.004, &USD_PROFILE).is_zero);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_minor_units(2.5, 0), 3);
        assert_eq!(to_minor_units(0.125, 2), 13);
        assert_eq!(grouped_magnitude(2.5, &VND_PROFILE).text, "3");
        assert_eq!(grouped_magnitude(0.125, &USD_PROFILE).text, "0.13");
    }

    #[test]
    fn test_render_minor_units_without_grouping() {
        assert_eq!(render_minor_units(23, 1, None), "2.3");
        assert_eq!(render_minor_units(100_000, 2, None), "1000.00");
        assert_eq!(render_minor_units(7, 0, None), "7");
    }

    #[test]
    fn test_with_symbol() {
        assert_eq!(with_symbol(false, "1.000", &VND_PROFILE), "1.000₫");
        assert_eq!(with_symbol(true, "1.000", &VND_PROFILE), "-1.000₫");
        assert_eq!(with_symbol(true, "1.50k", &USD_PROFILE), "-$1.50k");
    }
}
