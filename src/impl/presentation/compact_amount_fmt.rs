use crate::{
    entities::CurrencyMode,
    presentation::utils::{grouped_magnitude, render_minor_units, to_minor_units, with_symbol},
};

/// Checked in order; the first unit not larger than the amount wins.
const COMPACT_UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "k")];

impl CurrencyMode {
    /// Compact display format, ex. `2.5B₫`, `$1.50k`.
    ///
    /// Below 1,000 the full format is used (`999₫`, `$999.50`). Ties round
    /// away from zero, as in the full format (`2,250` VND is `2.3k₫`). A scaled
    /// value may render as `1000.0k` when rounding pushes it past the unit;
    /// the unit is chosen before rounding.
    pub(crate) fn format_compact_amount(&self, amount: f64) -> Option<String> {
        if !amount.is_finite() {
            return None;
        }
        let profile = self.profile();
        let abs_amount = amount.abs();
        let (text, is_zero) = match COMPACT_UNITS.iter().find(|(unit, _)| abs_amount >= *unit) {
            Some((unit, suffix)) => {
                let decimal_places = profile.compact_fraction_digits;
                let scaled = to_minor_units(abs_amount / unit, decimal_places);
                (
                    format!("{}{}", render_minor_units(scaled, decimal_places, None), suffix),
                    false,
                )
            }
            None => {
                let magnitude = grouped_magnitude(abs_amount, profile);
                (magnitude.text, magnitude.is_zero)
            }
        };
        Some(with_symbol(amount < 0.0 && !is_zero, &text, profile))
    }
}
