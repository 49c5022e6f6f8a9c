use std::sync::LazyLock;

use iso_currency::Currency;
use num_format::{CustomFormat, Grouping};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Display conventions for one currency mode.
///
/// The decimal point is always '.', including for VND compact amounts where
/// '.' otherwise acts as the grouping separator (ex. `2.5B₫`).
#[derive(Debug, Clone)]
pub struct LocaleProfile {
    pub grouping_separator: char,
    /// Fractional digits in full format, taken from the ISO 4217 exponent.
    pub fraction_digits: usize,
    /// Fractional digits in compact (k/M/B) format.
    pub compact_fraction_digits: usize,
    pub symbol: &'static str,
    pub symbol_position: SymbolPosition,
    pub(crate) grouping: CustomFormat,
}

impl LocaleProfile {
    fn new(
        currency: Currency,
        grouping_separator: char,
        compact_fraction_digits: usize,
        symbol: &'static str,
        symbol_position: SymbolPosition,
    ) -> Self {
        let grouping = CustomFormat::builder()
            .grouping(Grouping::Standard)
            .separator(grouping_separator.to_string())
            .minus_sign("-")
            .build()
            .expect("hardcoded number format should be valid");
        Self {
            grouping_separator,
            fraction_digits: currency.exponent().unwrap_or(0) as usize,
            compact_fraction_digits,
            symbol,
            symbol_position,
            grouping,
        }
    }
}

pub static VND_PROFILE: LazyLock<LocaleProfile> =
    LazyLock::new(|| LocaleProfile::new(Currency::VND, '.', 1, "₫", SymbolPosition::Suffix));
pub static USD_PROFILE: LazyLock<LocaleProfile> =
    LazyLock::new(|| LocaleProfile::new(Currency::USD, ',', 2, "$", SymbolPosition::Prefix));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_digits_follow_iso_exponent() {
        assert_eq!(VND_PROFILE.fraction_digits, 0);
        assert_eq!(USD_PROFILE.fraction_digits, 2);
    }

    #[test]
    fn test_symbol_positions() {
        assert_eq!(VND_PROFILE.symbol_position, SymbolPosition::Suffix);
        assert_eq!(USD_PROFILE.symbol_position, SymbolPosition::Prefix);
    }
}
