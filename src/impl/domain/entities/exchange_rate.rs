use fractic_server_error::ServerError;
use log::warn;

use crate::errors::InvalidExchangeRate;

/// Number of VND per 1 USD.
///
/// Guaranteed finite and strictly positive. Rates are sourced by the caller;
/// this crate only validates them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    pub fn new(vnd_per_usd: f64) -> Result<Self, ServerError> {
        if !vnd_per_usd.is_finite() || vnd_per_usd <= 0.0 {
            warn!("rejecting exchange rate {}", vnd_per_usd);
            return Err(InvalidExchangeRate::new(vnd_per_usd));
        }
        Ok(Self(vnd_per_usd))
    }

    pub fn vnd_per_usd(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ExchangeRate {
    type Error = ServerError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        ExchangeRate::new(value)
    }
}

impl Into<f64> for ExchangeRate {
    fn into(self) -> f64 {
        self.0
    }
}
