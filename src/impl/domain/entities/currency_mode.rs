use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde_derive::Deserialize;

use crate::errors::InvalidCurrencyCode;

use super::locale_profile::{LocaleProfile, USD_PROFILE, VND_PROFILE};

/// The two display conventions supported by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum CurrencyMode {
    /// Vietnamese dong: `1.234.567₫`.
    #[default]
    Vnd,
    /// US dollar: `$1,234.56`.
    Usd,
}

impl CurrencyMode {
    /// Maps the legacy `is_vnd` flag used across the app onto a mode.
    pub fn from_is_vnd(is_vnd: bool) -> Self {
        if is_vnd {
            CurrencyMode::Vnd
        } else {
            CurrencyMode::Usd
        }
    }

    pub fn is_vnd(&self) -> bool {
        matches!(self, CurrencyMode::Vnd)
    }

    pub fn currency(&self) -> Currency {
        match self {
            CurrencyMode::Vnd => Currency::VND,
            CurrencyMode::Usd => Currency::USD,
        }
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        self.currency().code()
    }

    pub fn symbol(&self) -> &'static str {
        self.profile().symbol
    }

    pub fn profile(&self) -> &'static LocaleProfile {
        match self {
            CurrencyMode::Vnd => &*VND_PROFILE,
            CurrencyMode::Usd => &*USD_PROFILE,
        }
    }
}

impl From<bool> for CurrencyMode {
    fn from(is_vnd: bool) -> Self {
        CurrencyMode::from_is_vnd(is_vnd)
    }
}

impl FromStr for CurrencyMode {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Currency::from_code(&s.trim().to_ascii_uppercase()) {
            Some(Currency::VND) => Ok(CurrencyMode::Vnd),
            Some(Currency::USD) => Ok(CurrencyMode::Usd),
            _ => Err(InvalidCurrencyCode::new(s)),
        }
    }
}

impl fmt::Display for CurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_is_vnd() {
        assert_eq!(CurrencyMode::from(true), CurrencyMode::Vnd);
        assert_eq!(CurrencyMode::from(false), CurrencyMode::Usd);
        assert!(CurrencyMode::Vnd.is_vnd());
        assert!(!CurrencyMode::Usd.is_vnd());
    }

    #[test]
    fn test_codes_and_symbols() {
        assert_eq!(CurrencyMode::Vnd.code(), "VND");
        assert_eq!(CurrencyMode::Usd.code(), "USD");
        assert_eq!(CurrencyMode::Vnd.symbol(), "₫");
        assert_eq!(CurrencyMode::Usd.symbol(), "$");
        assert_eq!(CurrencyMode::Usd.to_string(), "USD");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("VND".parse::<CurrencyMode>().unwrap(), CurrencyMode::Vnd);
        assert_eq!(" usd ".parse::<CurrencyMode>().unwrap(), CurrencyMode::Usd);
        assert!("EUR".parse::<CurrencyMode>().is_err());
        assert!("".parse::<CurrencyMode>().is_err());
    }
}
