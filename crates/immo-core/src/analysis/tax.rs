//! Rental income tax view (Einkünfte aus Vermietung und Verpachtung).
//!
//! Depreciation, loan interest and running costs are deducted from the
//! effective rent. A negative result is a loss that offsets other income at
//! the investor's marginal rate; the saving is reported as a positive
//! monthly/annual amount and added to the pre-tax cash flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inputs::{TaxInputMode, TaxInputs};
use crate::reference::tax_brackets::{marginal_rate_for_income, SOLI_FACTOR};
use crate::types::{annualize, monthly, pct, Money, Percent};

/// Whether the tax figures come from caller inputs or the built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBasis {
    Supplied,
    Defaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxMetrics {
    /// Price plus side costs, the depreciation basis before the land split
    pub total_acquisition_cost: Money,
    pub building_value: Money,
    pub land_value: Money,
    pub annual_depreciation: Money,
    /// Marginal rate used, percent, including Soli when selected
    pub effective_marginal_rate: Percent,
    pub annual_deductible_interest: Money,
    pub total_deductible_expenses: Money,
    /// Negative values are deductible losses
    pub taxable_rental_income: Money,
    /// Positive when the rental result is a loss
    pub annual_tax_savings: Money,
    pub monthly_tax_savings: Money,
    pub monthly_cash_flow_after_tax: Money,
    pub annual_cash_flow_after_tax: Money,
}

/// Figures the tax view needs from the rest of the analysis.
#[derive(Debug, Clone, Copy)]
pub struct TaxBase {
    pub purchase_price: Money,
    pub total_purchase_costs: Money,
    pub monthly_interest: Money,
    pub effective_annual_rent: Money,
    pub annual_expenses: Money,
    pub monthly_cash_flow: Money,
}

/// Marginal rate after income splitting and the solidarity surcharge.
pub fn effective_marginal_rate(tax: &TaxInputs) -> Percent {
    let base_rate = match tax.tax_input_mode {
        TaxInputMode::Income => {
            let income = if tax.joint_tax_declaration {
                tax.taxable_income / Decimal::TWO
            } else {
                tax.taxable_income
            };
            marginal_rate_for_income(income)
        }
        TaxInputMode::Rate => tax.marginal_tax_rate,
    };

    if tax.include_soli {
        base_rate * SOLI_FACTOR
    } else {
        base_rate
    }
}

/// Tax saving (positive) or extra tax (negative) for a rental result.
pub fn tax_savings(taxable_rental_income: Money, marginal_rate: Percent) -> Money {
    -taxable_rental_income * pct(marginal_rate)
}

pub fn tax_metrics(base: &TaxBase, tax: &TaxInputs) -> TaxMetrics {
    let total_acquisition_cost = base.purchase_price + base.total_purchase_costs;
    let land_share = pct(tax.land_value_percent);
    let building_value = total_acquisition_cost * (Decimal::ONE - land_share);
    let land_value = total_acquisition_cost * land_share;
    let annual_depreciation = building_value * pct(tax.depreciation_rate);

    let effective_marginal_rate = effective_marginal_rate(tax);

    let annual_deductible_interest = annualize(base.monthly_interest);
    let total_deductible_expenses =
        annual_depreciation + annual_deductible_interest + base.annual_expenses;
    let taxable_rental_income = base.effective_annual_rent - total_deductible_expenses;

    let annual_tax_savings = tax_savings(taxable_rental_income, effective_marginal_rate);
    let monthly_tax_savings = monthly(annual_tax_savings);
    let monthly_cash_flow_after_tax = base.monthly_cash_flow + monthly_tax_savings;

    TaxMetrics {
        total_acquisition_cost,
        building_value,
        land_value,
        annual_depreciation,
        effective_marginal_rate,
        annual_deductible_interest,
        total_deductible_expenses,
        taxable_rental_income,
        annual_tax_savings,
        monthly_tax_savings,
        monthly_cash_flow_after_tax,
        annual_cash_flow_after_tax: annualize(monthly_cash_flow_after_tax),
    }
}
