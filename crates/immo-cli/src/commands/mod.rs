pub mod analysis;
pub mod reference;
pub mod schedule;

use immo_core::ImmoError;
use rust_decimal::Decimal;

/// A flag that must be present when no input file or stdin is given.
pub(crate) fn required(value: Option<Decimal>, flag: &str) -> Result<Decimal, ImmoError> {
    value.ok_or_else(|| ImmoError::InvalidInput {
        field: flag.to_string(),
        reason: format!("--{} is required (or provide --input)", flag),
    })
}
