use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inputs::RentalInputs;
use crate::types::{annualize, pct, Money};

/// Rent after vacancy and the non-recoverable running costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalMetrics {
    pub effective_monthly_rent: Money,
    /// Contractual rent, before vacancy
    pub annual_rent: Money,
    pub effective_annual_rent: Money,
    /// Hausgeld plus maintenance reserve
    pub monthly_expenses: Money,
    pub annual_expenses: Money,
}

pub fn rental_metrics(rental: &RentalInputs) -> RentalMetrics {
    let effective_monthly_rent = rental.monthly_rent * (Decimal::ONE - pct(rental.vacancy_rate));
    let monthly_expenses = rental.monthly_hausgeld + rental.maintenance_reserve;

    RentalMetrics {
        effective_monthly_rent,
        annual_rent: annualize(rental.monthly_rent),
        effective_annual_rent: annualize(effective_monthly_rent),
        monthly_expenses,
        annual_expenses: annualize(monthly_expenses),
    }
}
