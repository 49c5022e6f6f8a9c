use crate::entities::{CurrencyMode, ExchangeRate};

// Unguarded: a zero or negative rate passes straight through.
pub(crate) fn vnd_to_usd(vnd_amount: f64, vnd_per_usd: f64) -> f64 {
    vnd_amount / vnd_per_usd
}

pub(crate) fn usd_to_vnd(usd_amount: f64, vnd_per_usd: f64) -> f64 {
    usd_amount * vnd_per_usd
}

pub(crate) fn convert(
    amount: f64,
    from: CurrencyMode,
    to: CurrencyMode,
    rate: ExchangeRate,
) -> f64 {
    match (from, to) {
        (CurrencyMode::Vnd, CurrencyMode::Usd) => vnd_to_usd(amount, rate.vnd_per_usd()),
        (CurrencyMode::Usd, CurrencyMode::Vnd) => usd_to_vnd(amount, rate.vnd_per_usd()),
        _ => amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnd_usd_arithmetic() {
        assert_eq!(vnd_to_usd(254_000.0, 25_400.0), 10.0);
        assert_eq!(usd_to_vnd(10.0, 25_400.0), 254_000.0);
    }

    #[test]
    fn test_degenerate_rates_propagate() {
        assert!(vnd_to_usd(1_000.0, 0.0).is_infinite());
        assert_eq!(usd_to_vnd(2.0, -3.0), -6.0);
    }

    #[test]
    fn test_round_trip_through_usd() {
        for rate in [1.0, 23_500.0, 0.5, -7.0] {
            for x in [0.0, 1.0, 1_234_567.0, -42.5] {
                let back = usd_to_vnd(vnd_to_usd(x, rate), rate);
                assert!((back - x).abs() <= 1e-6 * x.abs().max(1.0));
            }
        }
    }

    #[test]
    fn test_convert() {
        let rate = ExchangeRate::new(25_000.0).unwrap();
        assert_eq!(convert(50_000.0, CurrencyMode::Vnd, CurrencyMode::Usd, rate), 2.0);
        assert_eq!(convert(2.0, CurrencyMode::Usd, CurrencyMode::Vnd, rate), 50_000.0);
        assert_eq!(convert(7.5, CurrencyMode::Usd, CurrencyMode::Usd, rate), 7.5);
        assert_eq!(convert(7.0, CurrencyMode::Vnd, CurrencyMode::Vnd, rate), 7.0);
    }
}
