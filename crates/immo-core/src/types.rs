use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values (euros). Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages stored as whole numbers (6.0 = 6%). Divided by 100 at use.
pub type Percent = Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Convert a whole-number percentage into a fraction (3.5 -> 0.035).
pub fn pct(rate: Percent) -> Decimal {
    rate / HUNDRED
}

/// `numerator / denominator`, or zero when the denominator is zero.
pub fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// `numerator / denominator * 100`, or zero when the denominator is zero.
pub fn safe_percent(numerator: Decimal, denominator: Decimal) -> Percent {
    safe_ratio(numerator, denominator) * HUNDRED
}

/// Scale a monthly amount to a year.
pub fn annualize(monthly: Money) -> Money {
    monthly * MONTHS_PER_YEAR
}

/// Spread an annual amount over twelve months.
pub fn monthly(annual: Money) -> Money {
    annual / MONTHS_PER_YEAR
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
