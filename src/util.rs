use std::{str::FromStr as _, sync::LazyLock};

use fractic_server_error::ServerError;
use log::warn;

use crate::{
    data::{
        datasources::config_ron_datasource::{ConfigRonDatasource as _, ConfigRonDatasourceImpl},
        models::amount_text_model::AmountTextModel,
    },
    domain::logic::conversion,
    entities::{AmountFormatterConfig, CurrencyMode, ExchangeRate},
    errors::InvalidAmount,
};

/// Formats, parses and converts VND/USD amounts.
///
/// All operations are pure; the only state is the configuration, which is
/// immutable once built. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct AmountUtil {
    config: AmountFormatterConfig,
}

impl AmountUtil {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AmountFormatterConfig) -> Self {
        Self { config }
    }

    pub fn from_ron_config(ron_config: &str) -> Result<Self, ServerError> {
        Ok(Self::with_config(
            ConfigRonDatasourceImpl::new().from_string(ron_config)?,
        ))
    }

    pub fn from_ron_config_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self::with_config(
            ConfigRonDatasourceImpl::new().from_file(path)?,
        ))
    }

    pub fn config(&self) -> &AmountFormatterConfig {
        &self.config
    }

    // Formatting.
    // ---

    /// `1.234.567₫` / `-$1,234.56`. NaN and infinities render as the
    /// configured placeholder.
    pub fn format_amount(&self, amount: f64, mode: CurrencyMode) -> String {
        mode.format_amount(amount)
            .unwrap_or_else(|| self.placeholder(amount))
    }

    pub fn try_format_amount(
        &self,
        amount: f64,
        mode: CurrencyMode,
    ) -> Result<String, ServerError> {
        mode.format_amount(amount)
            .ok_or_else(|| InvalidAmount::new(amount))
    }

    /// Dispatches on the `is_vnd` flag used by callers that predate
    /// `CurrencyMode`.
    pub fn format_amount_flag(&self, amount: f64, is_vnd: bool) -> String {
        self.format_amount(amount, CurrencyMode::from_is_vnd(is_vnd))
    }

    /// Formats in the configured default mode.
    pub fn format_default(&self, amount: f64) -> String {
        self.format_amount(amount, self.config.default_mode)
    }

    /// `2.5B₫` / `$1.50k`.
    pub fn format_compact_amount(&self, amount: f64, mode: CurrencyMode) -> String {
        mode.format_compact_amount(amount)
            .unwrap_or_else(|| self.placeholder(amount))
    }

    pub fn try_format_compact_amount(
        &self,
        amount: f64,
        mode: CurrencyMode,
    ) -> Result<String, ServerError> {
        mode.format_compact_amount(amount)
            .ok_or_else(|| InvalidAmount::new(amount))
    }

    /// Grouped amount without the currency symbol, for editable fields.
    pub fn format_for_input(&self, amount: f64, mode: CurrencyMode) -> String {
        mode.format_for_input(amount)
            .unwrap_or_else(|| self.placeholder(amount))
    }

    fn placeholder(&self, amount: f64) -> String {
        warn!("cannot format non-finite amount {}", amount);
        self.config.non_finite_placeholder.clone()
    }

    // Parsing.
    // ---

    /// Guesses the grouping convention from the text; see `parse_amount_as`
    /// when the mode is known.
    pub fn parse_amount(&self, text: &str) -> Option<f64> {
        self.try_parse_amount(text).ok()
    }

    pub fn try_parse_amount(&self, text: &str) -> Result<f64, ServerError> {
        Ok(AmountTextModel::from_str(text)?.into())
    }

    pub fn parse_amount_as(&self, text: &str, mode: CurrencyMode) -> Option<f64> {
        AmountTextModel::parse_as(text, mode).ok().map(Into::into)
    }

    /// Parses and is strictly positive.
    pub fn is_valid_amount(&self, text: &str) -> bool {
        self.parse_amount(text).is_some_and(|amount| amount > 0.0)
    }

    // Currency.
    // ---

    pub fn currency_symbol(mode: CurrencyMode) -> &'static str {
        mode.symbol()
    }

    pub fn currency_code(mode: CurrencyMode) -> &'static str {
        mode.code()
    }

    /// `vnd_amount / rate`. The rate is not validated.
    pub fn vnd_to_usd(vnd_amount: f64, rate: f64) -> f64 {
        conversion::vnd_to_usd(vnd_amount, rate)
    }

    /// `usd_amount * rate`. The rate is not validated.
    pub fn usd_to_vnd(usd_amount: f64, rate: f64) -> f64 {
        conversion::usd_to_vnd(usd_amount, rate)
    }

    pub fn convert(amount: f64, from: CurrencyMode, to: CurrencyMode, rate: ExchangeRate) -> f64 {
        conversion::convert(amount, from, to, rate)
    }
}

// Shorthands using the default configuration.
// ---

static DEFAULT_UTIL: LazyLock<AmountUtil> = LazyLock::new(AmountUtil::new);

pub fn format_amount(amount: f64, mode: CurrencyMode) -> String {
    DEFAULT_UTIL.format_amount(amount, mode)
}

pub fn format_compact_amount(amount: f64, mode: CurrencyMode) -> String {
    DEFAULT_UTIL.format_compact_amount(amount, mode)
}

pub fn format_for_input(amount: f64, mode: CurrencyMode) -> String {
    DEFAULT_UTIL.format_for_input(amount, mode)
}

pub fn parse_amount(text: &str) -> Option<f64> {
    DEFAULT_UTIL.parse_amount(text)
}

pub fn is_valid_amount(text: &str) -> bool {
    DEFAULT_UTIL.is_valid_amount(text)
}
