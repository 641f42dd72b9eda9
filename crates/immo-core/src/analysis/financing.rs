use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inputs::{FinancingInputs, PropertyInputs};
use super::purchase_costs::PurchaseCosts;
use crate::types::{annualize, monthly, pct, safe_percent, Money, Percent};

/// Loan size and debt service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingMetrics {
    /// Total investment not covered by equity, floored at zero
    pub loan_amount: Money,
    /// Loan as percent of the purchase price (side costs excluded)
    pub loan_to_value: Percent,
    pub monthly_mortgage: Money,
    pub annual_mortgage: Money,
    /// First-month interest portion, used for the tax deduction
    pub monthly_interest: Money,
}

/// Derive loan amount and debt service.
///
/// The mortgage rate follows the German annuity convention: interest plus
/// initial repayment, applied to the original loan amount. This is the
/// constant instalment, not a declining-balance interest figure; the payoff
/// schedule does the month-by-month split.
pub fn financing_metrics(
    property: &PropertyInputs,
    costs: &PurchaseCosts,
    financing: &FinancingInputs,
) -> FinancingMetrics {
    let loan_amount = (costs.total_investment - financing.equity).max(Decimal::ZERO);

    let (monthly_mortgage, monthly_interest) = if loan_amount <= Decimal::ZERO {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let annuity_rate = pct(financing.interest_rate + financing.repayment_rate);
        (
            monthly(loan_amount * annuity_rate),
            monthly(loan_amount * pct(financing.interest_rate)),
        )
    };

    FinancingMetrics {
        loan_amount,
        loan_to_value: safe_percent(loan_amount, property.purchase_price),
        monthly_mortgage,
        annual_mortgage: annualize(monthly_mortgage),
        monthly_interest,
    }
}
