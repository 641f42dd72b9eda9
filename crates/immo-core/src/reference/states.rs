use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::ImmoError;
use crate::types::Percent;
use crate::ImmoResult;

/// A German federal state with its statutory real-estate transfer tax
/// (Grunderwerbsteuer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GermanState {
    pub name: &'static str,
    pub code: &'static str,
    /// Transfer tax in percent of the purchase price
    pub tax_rate: Percent,
}

const fn state(name: &'static str, code: &'static str, tax_rate: Decimal) -> GermanState {
    GermanState {
        name,
        code,
        tax_rate,
    }
}

pub static GERMAN_STATES: [GermanState; 16] = [
    state("Baden-Württemberg", "BW", dec!(5.0)),
    state("Bayern", "BY", dec!(3.5)),
    state("Berlin", "BE", dec!(6.0)),
    state("Brandenburg", "BB", dec!(6.5)),
    state("Bremen", "HB", dec!(5.0)),
    state("Hamburg", "HH", dec!(5.5)),
    state("Hessen", "HE", dec!(6.0)),
    state("Mecklenburg-Vorpommern", "MV", dec!(6.0)),
    state("Niedersachsen", "NI", dec!(5.0)),
    state("Nordrhein-Westfalen", "NW", dec!(6.5)),
    state("Rheinland-Pfalz", "RP", dec!(5.0)),
    state("Saarland", "SL", dec!(6.5)),
    state("Sachsen", "SN", dec!(5.5)),
    state("Sachsen-Anhalt", "ST", dec!(5.0)),
    state("Schleswig-Holstein", "SH", dec!(6.5)),
    state("Thüringen", "TH", dec!(5.0)),
];

/// Look up a state by its two-letter code. Matching is exact.
pub fn state_by_code(code: &str) -> Option<&'static GermanState> {
    GERMAN_STATES.iter().find(|s| s.code == code)
}

/// Like [`state_by_code`], but an unknown code is an error.
pub fn resolve_state(code: &str) -> ImmoResult<&'static GermanState> {
    state_by_code(code).ok_or_else(|| ImmoError::UnknownState {
        code: code.to_string(),
    })
}
