use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::financing::FinancingMetrics;
use super::purchase_costs::PurchaseCosts;
use super::rental::RentalMetrics;
use crate::types::{annualize, safe_percent, safe_ratio, Money, Percent};

/// Pre-tax cash flow and net operating income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowMetrics {
    /// Effective rent minus running costs minus mortgage
    pub monthly_cash_flow: Money,
    pub annual_cash_flow: Money,
    /// Effective rent minus running costs, before financing
    pub monthly_noi: Money,
    pub annual_noi: Money,
}

/// Yield ratios on price and on total investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldMetrics {
    /// Contractual annual rent / purchase price, percent
    pub gross_yield: Percent,
    /// Annual NOI / total investment, percent
    pub net_yield: Percent,
    /// Annual cash flow / equity, percent (after tax when a tax analysis was supplied)
    pub cash_on_cash_return: Percent,
    /// Kaufpreisfaktor: purchase price / annual rent
    pub rent_multiplier: Decimal,
}

pub fn cash_flow_metrics(rental: &RentalMetrics, financing: &FinancingMetrics) -> CashFlowMetrics {
    let monthly_noi = rental.effective_monthly_rent - rental.monthly_expenses;
    let monthly_cash_flow = monthly_noi - financing.monthly_mortgage;

    CashFlowMetrics {
        monthly_cash_flow,
        annual_cash_flow: annualize(monthly_cash_flow),
        monthly_noi,
        annual_noi: annualize(monthly_noi),
    }
}

/// Compute yields. `annual_return_cash_flow` is the cash flow the
/// cash-on-cash return is measured on (pre- or post-tax).
pub fn yield_metrics(
    purchase_price: Money,
    equity: Money,
    costs: &PurchaseCosts,
    rental: &RentalMetrics,
    cash_flow: &CashFlowMetrics,
    annual_return_cash_flow: Money,
) -> YieldMetrics {
    let cash_on_cash_return = if equity > Decimal::ZERO {
        safe_percent(annual_return_cash_flow, equity)
    } else {
        Decimal::ZERO
    };

    YieldMetrics {
        gross_yield: safe_percent(rental.annual_rent, purchase_price),
        net_yield: safe_percent(cash_flow.annual_noi, costs.total_investment),
        cash_on_cash_return,
        rent_multiplier: safe_ratio(purchase_price, rental.annual_rent),
    }
}
