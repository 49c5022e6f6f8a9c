use std::{str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use log::debug;
use regex::Regex;

use crate::{entities::CurrencyMode, errors::InvalidAmountText};

/// Ends with '.' followed by exactly 1 or 2 digits, i.e. a USD-style decimal
/// point rather than a VND-style thousands separator.
static TRAILING_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[0-9]{1,2}$").expect("hardcoded regex should be valid"));

/// Amount parsed from display or user-entered text.
///
/// Without a mode hint the grouping convention is guessed from the shape of
/// the trailing fraction. The guess is ambiguous: "1.23" always reads as
/// 1.23, even when a VND user meant 1230.
#[derive(Debug)]
pub(crate) struct AmountTextModel(pub f64);

impl AmountTextModel {
    /// Parse text known to be in the given mode's convention. Grouping must
    /// be well formed: "1.234" is valid VND, "1.23" is not.
    pub(crate) fn parse_as(s: &str, mode: CurrencyMode) -> Result<Self, ServerError> {
        let cleaned = strip_symbols(s);
        let separator = mode.profile().grouping_separator;
        let integer_part = match mode.profile().fraction_digits {
            0 => cleaned.as_str(),
            _ => cleaned.split_once('.').map_or(cleaned.as_str(), |(i, _)| i),
        };
        if !is_well_grouped(integer_part, separator) {
            debug!("malformed {} grouping in '{}'", mode, s);
            return Err(InvalidAmountText::new(s));
        }
        parse_numeric(&cleaned.replace(separator, ""))
            .map(AmountTextModel)
            .ok_or_else(|| {
                debug!("failed to parse {} amount from '{}'", mode, s);
                InvalidAmountText::new(s)
            })
    }
}

impl FromStr for AmountTextModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = strip_symbols(s);
        let numeric = if TRAILING_FRACTION.is_match(&cleaned) {
            cleaned.replace(',', "")
        } else if cleaned.contains('.') {
            cleaned.replace('.', "")
        } else {
            cleaned.replace(',', "")
        };
        parse_numeric(&numeric).map(AmountTextModel).ok_or_else(|| {
            debug!("failed to parse amount from '{}'", s);
            InvalidAmountText::new(s)
        })
    }
}

impl Into<f64> for AmountTextModel {
    fn into(self) -> f64 {
        self.0
    }
}

fn strip_symbols(s: &str) -> String {
    s.replace(['₫', '$'], "").trim().to_string()
}

/// Ungrouped digits pass; otherwise the first group has 1 to 3 digits and
/// every later group exactly 3.
fn is_well_grouped(integer_part: &str, separator: char) -> bool {
    if !integer_part.contains(separator) {
        return true;
    }
    let mut groups = integer_part.trim_start_matches('-').split(separator);
    let leading_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    leading_ok && groups.all(|g| g.len() == 3)
}

fn parse_numeric(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
