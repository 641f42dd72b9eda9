//! Buy-to-let investment analysis: purchase side costs, financing, rental
//! cash flow, yields and the rental income tax view.

pub mod financing;
pub mod inputs;
pub mod purchase_costs;
pub mod rental;
pub mod returns;
pub mod session;
pub mod tax;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput};

pub use financing::{financing_metrics, FinancingMetrics};
pub use inputs::{
    FinancingInputs, InvestmentInput, PropertyInputs, RentalInputs, TaxInputMode, TaxInputs,
};
pub use purchase_costs::{purchase_costs, PurchaseCosts};
pub use rental::{rental_metrics, RentalMetrics};
pub use returns::{cash_flow_metrics, yield_metrics, CashFlowMetrics, YieldMetrics};
pub use session::InvestmentSession;
pub use tax::{effective_marginal_rate, tax_metrics, TaxBase, TaxBasis, TaxMetrics};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Every derived figure of an investment analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentMetrics {
    pub purchase_costs: PurchaseCosts,
    pub financing: FinancingMetrics,
    pub rental: RentalMetrics,
    pub cash_flow: CashFlowMetrics,
    pub yields: YieldMetrics,
    pub tax: TaxMetrics,
    /// `defaults` when the input carried no tax group
    pub tax_basis: TaxBasis,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive all investment metrics from the input set.
///
/// Never fails: zero denominators produce zero ratios, and a missing tax
/// group is replaced by [`TaxInputs::default`]. Cash-on-cash return is
/// measured after tax only when the caller supplied tax inputs.
pub fn analyze_investment(input: &InvestmentInput) -> ComputationOutput<InvestmentMetrics> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    collect_warnings(input, &mut warnings);

    let metrics = derive_metrics(input);

    if input.financing.equity > metrics.purchase_costs.total_investment
        && metrics.purchase_costs.total_investment > Decimal::ZERO
    {
        warnings.push(format!(
            "Equity exceeds the total investment of {:.2}; no loan is needed",
            metrics.purchase_costs.total_investment
        ));
    }

    if metrics.cash_flow.monthly_cash_flow < Decimal::ZERO {
        warnings.push(format!(
            "Pre-tax monthly cash flow is negative ({:.2}); the investment needs top-up payments",
            metrics.cash_flow.monthly_cash_flow
        ));
    }

    log::debug!(
        "analysed investment: price={} loan={} monthly_mortgage={} tax_basis={:?}",
        input.property.purchase_price,
        metrics.financing.loan_amount,
        metrics.financing.monthly_mortgage,
        metrics.tax_basis
    );

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "German Buy-to-Let Analysis (Kaufnebenkosten, Annuity Approximation, AfA)",
        input,
        warnings,
        elapsed,
        metrics,
    )
}

/// The pure derivation behind [`analyze_investment`], without the envelope.
pub fn derive_metrics(input: &InvestmentInput) -> InvestmentMetrics {
    let property = &input.property;

    let costs = purchase_costs(property);
    let financing = financing_metrics(property, &costs, &input.financing);
    let rental = rental_metrics(&input.rental);
    let cash_flow = cash_flow_metrics(&rental, &financing);

    let (tax_inputs, tax_basis) = match &input.tax {
        Some(tax) => (tax.clone(), TaxBasis::Supplied),
        None => (TaxInputs::default(), TaxBasis::Defaults),
    };
    let tax = tax_metrics(
        &TaxBase {
            purchase_price: property.purchase_price,
            total_purchase_costs: costs.total_purchase_costs,
            monthly_interest: financing.monthly_interest,
            effective_annual_rent: rental.effective_annual_rent,
            annual_expenses: rental.annual_expenses,
            monthly_cash_flow: cash_flow.monthly_cash_flow,
        },
        &tax_inputs,
    );

    let return_cash_flow = match tax_basis {
        TaxBasis::Supplied => tax.annual_cash_flow_after_tax,
        TaxBasis::Defaults => cash_flow.annual_cash_flow,
    };
    let yields = yield_metrics(
        property.purchase_price,
        input.financing.equity,
        &costs,
        &rental,
        &cash_flow,
        return_cash_flow,
    );

    InvestmentMetrics {
        purchase_costs: costs,
        financing,
        rental,
        cash_flow,
        yields,
        tax,
        tax_basis,
    }
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

fn collect_warnings(input: &InvestmentInput, warnings: &mut Vec<String>) {
    if input.property.purchase_price.is_zero() {
        warnings.push("Purchase price is zero; price-based ratios are reported as 0".into());
    }

    if input.financing.equity <= Decimal::ZERO {
        warnings.push("No equity supplied; cash-on-cash return is reported as 0".into());
    }

    if input.rental.vacancy_rate > dec!(15) {
        warnings.push(format!(
            "Vacancy rate {}% exceeds 15%, above typical market norms",
            input.rental.vacancy_rate
        ));
    }

    if input.tax.is_none() {
        warnings.push(
            "No tax inputs; tax figures use 2% depreciation, 20% land share and a 42% marginal rate"
                .into(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_input() -> InvestmentInput {
        InvestmentInput {
            property: PropertyInputs {
                purchase_price: dec!(300000),
                state_code: "BE".into(),
                state_tax_rate: dec!(6.0),
                notary_rate: dec!(1.5),
                land_registry_rate: dec!(0.5),
                broker_rate: dec!(3.57),
                include_broker: true,
            },
            financing: FinancingInputs {
                equity: dec!(60000),
                interest_rate: dec!(3.5),
                repayment_rate: dec!(2.0),
            },
            rental: RentalInputs {
                monthly_rent: dec!(1100),
                monthly_hausgeld: dec!(120),
                maintenance_reserve: dec!(50),
                vacancy_rate: Decimal::ZERO,
            },
            tax: None,
        }
    }

    #[test]
    fn test_scenario_purchase_and_financing() {
        let out = analyze_investment(&sample_input());
        let m = &out.result;
        assert_eq!(m.purchase_costs.total_purchase_costs, dec!(34710));
        assert_eq!(m.purchase_costs.total_investment, dec!(334710));
        assert_eq!(m.financing.loan_amount, dec!(274710));
        assert_eq!(m.financing.monthly_mortgage, dec!(1259.0875));
    }

    #[test]
    fn test_pre_tax_cash_flow() {
        let m = derive_metrics(&sample_input());
        assert_eq!(m.cash_flow.monthly_noi, dec!(930));
        assert_eq!(m.cash_flow.monthly_cash_flow, dec!(-329.0875));
        assert_eq!(m.cash_flow.annual_cash_flow, dec!(-3949.05));
        assert_eq!(m.yields.gross_yield, dec!(4.4));
        assert_eq!(m.yields.rent_multiplier.round_dp(4), dec!(22.7273));
    }

    #[test]
    fn test_without_tax_uses_pre_tax_cash_on_cash() {
        let m = derive_metrics(&sample_input());
        assert_eq!(m.tax_basis, TaxBasis::Defaults);
        // -3949.05 / 60000 * 100
        assert_eq!(m.yields.cash_on_cash_return, dec!(-6.58175));
        // tax figures still computed with the default basis
        assert_eq!(m.tax.effective_marginal_rate, dec!(42));
        assert_eq!(m.tax.annual_depreciation, dec!(5355.36));
    }

    #[test]
    fn test_with_tax_uses_after_tax_cash_on_cash() {
        let mut input = sample_input();
        input.tax = Some(TaxInputs::default());
        let m = derive_metrics(&input);
        assert_eq!(m.tax_basis, TaxBasis::Supplied);
        assert_eq!(m.tax.annual_cash_flow_after_tax, dec!(-2348.7618));
        // -2348.7618 / 60000 * 100
        assert_eq!(m.yields.cash_on_cash_return, dec!(-3.91460300));
    }

    #[test]
    fn test_tax_group_only_changes_cash_on_cash() {
        let without = derive_metrics(&sample_input());
        let mut input = sample_input();
        input.tax = Some(TaxInputs::default());
        let with = derive_metrics(&input);

        assert_eq!(without.tax, with.tax);
        assert_eq!(without.cash_flow, with.cash_flow);
        assert_ne!(
            without.yields.cash_on_cash_return,
            with.yields.cash_on_cash_return
        );
    }

    #[test]
    fn test_deterministic() {
        let input = sample_input();
        assert_eq!(derive_metrics(&input), derive_metrics(&input));
    }

    #[test]
    fn test_zero_price_all_ratios_zero() {
        let mut input = sample_input();
        input.property.purchase_price = Decimal::ZERO;
        input.financing.equity = Decimal::ZERO;
        let out = analyze_investment(&input);
        let m = &out.result;
        assert_eq!(m.purchase_costs.purchase_costs_rate, Decimal::ZERO);
        assert_eq!(m.financing.loan_to_value, Decimal::ZERO);
        assert_eq!(m.yields.gross_yield, Decimal::ZERO);
        assert_eq!(m.yields.net_yield, Decimal::ZERO);
        assert_eq!(m.yields.cash_on_cash_return, Decimal::ZERO);
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("Purchase price is zero")));
    }

    #[test]
    fn test_negative_cash_flow_warning() {
        let out = analyze_investment(&sample_input());
        assert!(out.warnings.iter().any(|w| w.contains("negative")));
    }

    #[test]
    fn test_high_vacancy_warning() {
        let mut input = sample_input();
        input.rental.vacancy_rate = dec!(20);
        let out = analyze_investment(&input);
        assert!(out.warnings.iter().any(|w| w.contains("Vacancy rate")));
    }

    #[test]
    fn test_methodology_string() {
        let out = analyze_investment(&sample_input());
        assert!(out.methodology.contains("Buy-to-Let"));
    }
}
