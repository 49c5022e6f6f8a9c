use crate::{
    entities::CurrencyMode,
    presentation::utils::{grouped_magnitude, with_symbol},
};

impl CurrencyMode {
    /// Full display format, ex. `-1.234.567₫` or `-$1,234.56`.
    ///
    /// Returns None for NaN or infinite amounts.
    pub(crate) fn format_amount(&self, amount: f64) -> Option<String> {
        if !amount.is_finite() {
            return None;
        }
        let profile = self.profile();
        let magnitude = grouped_magnitude(amount.abs(), profile);
        Some(with_symbol(
            amount < 0.0 && !magnitude.is_zero,
            &magnitude.text,
            profile,
        ))
    }

    /// Same grouping as `format_amount`, without the currency symbol. Used to
    /// prefill editable fields.
    pub(crate) fn format_for_input(&self, amount: f64) -> Option<String> {
        if !amount.is_finite() {
            return None;
        }
        let magnitude = grouped_magnitude(amount.abs(), self.profile());
        if amount < 0.0 && !magnitude.is_zero {
            Some(format!("-{}", magnitude.text))
        } else {
            Some(magnitude.text)
        }
    }
}
