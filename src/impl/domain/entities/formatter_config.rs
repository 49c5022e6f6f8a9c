use serde_derive::Deserialize;

use super::currency_mode::CurrencyMode;

pub const DEFAULT_NON_FINITE_PLACEHOLDER: &str = "--";

/// Tunables for `AmountUtil`. Loadable from RON, where every field is
/// optional:
///
/// ```ron
/// (
///     non_finite_placeholder: "n/a",
///     default_mode: Usd,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AmountFormatterConfig {
    /// Rendered in place of NaN or infinite amounts.
    pub non_finite_placeholder: String,
    pub default_mode: CurrencyMode,
}

impl Default for AmountFormatterConfig {
    fn default() -> Self {
        Self {
            non_finite_placeholder: DEFAULT_NON_FINITE_PLACEHOLDER.to_string(),
            default_mode: CurrencyMode::default(),
        }
    }
}
