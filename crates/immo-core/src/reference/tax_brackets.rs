use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::{Money, Percent};

/// Basic allowance (Grundfreibetrag); income up to here is untaxed.
pub const BASIC_ALLOWANCE: Money = dec!(11604);
/// Upper bound of the first progression zone.
pub const FIRST_ZONE_END: Money = dec!(17005);
/// Upper bound of the second progression zone.
pub const SECOND_ZONE_END: Money = dec!(66760);
/// Upper bound of the 42% zone; above it the top rate applies.
pub const TOP_RATE_THRESHOLD: Money = dec!(277825);

/// Solidarity surcharge (Soli), applied as a factor on the marginal rate.
pub const SOLI_FACTOR: Decimal = dec!(1.055);

/// A labelled marginal rate for quick selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginalRatePreset {
    pub label: &'static str,
    pub rate: Percent,
}

pub static MARGINAL_RATE_PRESETS: [MarginalRatePreset; 6] = [
    MarginalRatePreset { label: "0%", rate: dec!(0) },
    MarginalRatePreset { label: "14%", rate: dec!(14) },
    MarginalRatePreset { label: "24%", rate: dec!(24) },
    MarginalRatePreset { label: "33%", rate: dec!(33) },
    MarginalRatePreset { label: "42%", rate: dec!(42) },
    MarginalRatePreset { label: "45%", rate: dec!(45) },
];

/// Marginal income-tax rate (percent) for a taxable income, using the 2024
/// German progressive bands.
///
/// Within the progression zones this is the derivative of the statutory tax
/// formula (`(922.98 * y + 1400) * y` and `(181.19 * z + 2397) * z`), rounded
/// to two decimals. Each band includes its upper bound.
///
/// The rounding is what lands the second zone exactly on 42 at its upper
/// bound: unrounded, f(66760) is 42.0002169.
pub fn marginal_rate_for_income(taxable_income: Money) -> Percent {
    if taxable_income <= BASIC_ALLOWANCE {
        Decimal::ZERO
    } else if taxable_income <= FIRST_ZONE_END {
        let y = (taxable_income - BASIC_ALLOWANCE) / ZONE_STEP;
        zone_rate(dec!(922.98), dec!(1400), y)
    } else if taxable_income <= SECOND_ZONE_END {
        let z = (taxable_income - FIRST_ZONE_END) / ZONE_STEP;
        zone_rate(dec!(181.19), dec!(2397), z)
    } else if taxable_income <= TOP_RATE_THRESHOLD {
        dec!(42)
    } else {
        dec!(45)
    }
}

const ZONE_STEP: Decimal = dec!(10000);

// d/dx of (a * t + b) * t with t = (x - zone start) / 10000, in percent
fn zone_rate(a: Decimal, b: Decimal, t: Decimal) -> Percent {
    ((dec!(2) * a * t + b) / Decimal::ONE_HUNDRED).round_dp(2)
}
