use immo_core::analysis::{
    analyze_investment, tax, FinancingInputs, InvestmentInput, InvestmentSession, PropertyInputs,
    RentalInputs, TaxBasis, TaxInputMode, TaxInputs,
};
use immo_core::reference::states::{resolve_state, GERMAN_STATES};
use immo_core::ImmoError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn berlin_flat() -> InvestmentInput {
    InvestmentInput {
        property: PropertyInputs::for_state("BE", dec!(300000)).unwrap(),
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

// ===========================================================================
// Purchase side costs
// ===========================================================================

#[test]
fn test_berlin_purchase_costs() {
    let out = analyze_investment(&berlin_flat());
    let c = &out.result.purchase_costs;

    assert_eq!(c.transfer_tax, dec!(18000));
    assert_eq!(c.notary_fees, dec!(4500));
    assert_eq!(c.land_registry_fees, dec!(1500));
    assert_eq!(c.broker_fees, dec!(10710));
    assert_eq!(c.total_purchase_costs, dec!(34710));
    assert_eq!(c.total_investment, dec!(334710));
}

#[test]
fn test_purchase_costs_sum_of_components_in_every_state() {
    for state in GERMAN_STATES.iter() {
        let mut input = berlin_flat();
        input.property = PropertyInputs::for_state(state.code, dec!(427500)).unwrap();
        let c = analyze_investment(&input).result.purchase_costs;

        assert_eq!(
            c.total_purchase_costs,
            c.transfer_tax + c.notary_fees + c.land_registry_fees + c.broker_fees,
            "state {}",
            state.code
        );
        assert_eq!(c.total_investment, dec!(427500) + c.total_purchase_costs);
    }
}

#[test]
fn test_no_broker_drops_fee() {
    let mut input = berlin_flat();
    input.property.include_broker = false;
    let c = analyze_investment(&input).result.purchase_costs;

    assert_eq!(c.broker_fees, Decimal::ZERO);
    assert_eq!(c.total_purchase_costs, dec!(24000));
    assert_eq!(c.purchase_costs_rate, dec!(8));
}

// ===========================================================================
// Financing and cash flow
// ===========================================================================

#[test]
fn test_berlin_financing_and_cash_flow() {
    let m = analyze_investment(&berlin_flat()).result;

    assert_eq!(m.financing.loan_amount, dec!(274710));
    // 274710 * (3.5 + 2.0) / 100 / 12
    assert_eq!(m.financing.monthly_mortgage, dec!(1259.0875));
    assert_eq!(m.cash_flow.monthly_noi, dec!(930));
    assert_eq!(m.cash_flow.monthly_cash_flow, dec!(-329.0875));
    assert_eq!(m.yields.gross_yield, dec!(4.4));
}

#[test]
fn test_equity_above_investment_means_no_loan() {
    let mut input = berlin_flat();
    input.financing.equity = dec!(400000);
    let out = analyze_investment(&input);
    let m = &out.result;

    assert_eq!(m.financing.loan_amount, Decimal::ZERO);
    assert_eq!(m.financing.monthly_mortgage, Decimal::ZERO);
    assert_eq!(m.financing.loan_to_value, Decimal::ZERO);
    assert_eq!(m.cash_flow.monthly_cash_flow, m.cash_flow.monthly_noi);
    assert!(out.warnings.iter().any(|w| w.contains("no loan is needed")));
}

#[test]
fn test_vacancy_reduces_effective_rent_only() {
    let mut input = berlin_flat();
    input.rental.vacancy_rate = dec!(5);
    let out = analyze_investment(&input);
    let r = &out.result.rental;

    assert_eq!(r.annual_rent, dec!(13200));
    assert_eq!(r.effective_monthly_rent, dec!(1045));
    assert_eq!(r.effective_annual_rent, dec!(12540));
    // gross yield is on the contract rent
    assert_eq!(out.result.yields.gross_yield, dec!(4.4));
}

// ===========================================================================
// Zero denominators
// ===========================================================================

#[test]
fn test_zero_price_and_equity_yield_zero_ratios() {
    let mut input = berlin_flat();
    input.property.purchase_price = Decimal::ZERO;
    input.financing.equity = Decimal::ZERO;
    let out = analyze_investment(&input);
    let m = &out.result;

    assert_eq!(m.purchase_costs.purchase_costs_rate, Decimal::ZERO);
    assert_eq!(m.financing.loan_to_value, Decimal::ZERO);
    assert_eq!(m.yields.gross_yield, Decimal::ZERO);
    assert_eq!(m.yields.net_yield, Decimal::ZERO);
    assert_eq!(m.yields.cash_on_cash_return, Decimal::ZERO);
    assert_eq!(m.yields.rent_multiplier, Decimal::ZERO);
    assert!(out.warnings.iter().any(|w| w.contains("Purchase price is zero")));
    assert!(out.warnings.iter().any(|w| w.contains("No equity")));
}

#[test]
fn test_zero_rent_rent_multiplier_zero() {
    let mut input = berlin_flat();
    input.rental.monthly_rent = Decimal::ZERO;
    let m = analyze_investment(&input).result;

    assert_eq!(m.yields.rent_multiplier, Decimal::ZERO);
    assert_eq!(m.yields.gross_yield, Decimal::ZERO);
}

// ===========================================================================
// Tax view
// ===========================================================================

#[test]
fn test_without_tax_group_uses_defaults_and_pre_tax_return() {
    let out = analyze_investment(&berlin_flat());
    let m = &out.result;

    assert_eq!(m.tax_basis, TaxBasis::Defaults);
    assert_eq!(m.tax.effective_marginal_rate, dec!(42));
    // -3949.05 / 60000
    assert_eq!(m.yields.cash_on_cash_return, dec!(-6.58175));
    assert!(out.warnings.iter().any(|w| w.contains("No tax inputs")));
}

#[test]
fn test_supplied_tax_group_drives_after_tax_return() {
    let mut input = berlin_flat();
    input.tax = Some(TaxInputs::default());
    let out = analyze_investment(&input);
    let m = &out.result;

    assert_eq!(m.tax_basis, TaxBasis::Supplied);
    assert_eq!(m.tax.building_value, dec!(267768));
    assert_eq!(m.tax.land_value, dec!(66942));
    assert_eq!(m.tax.annual_depreciation, dec!(5355.36));
    assert_eq!(m.tax.taxable_rental_income, dec!(-3810.21));
    assert_eq!(m.tax.annual_tax_savings, dec!(1600.2882));
    assert_eq!(m.tax.monthly_cash_flow_after_tax, dec!(-195.73015));
    assert_eq!(m.yields.cash_on_cash_return, dec!(-3.914603));
    assert!(!out.warnings.iter().any(|w| w.contains("No tax inputs")));
}

#[test]
fn test_rental_loss_is_a_saving() {
    assert_eq!(tax::tax_savings(dec!(-5000), dec!(42)), dec!(2100));
    assert_eq!(tax::tax_savings(dec!(5000), dec!(42)), dec!(-2100));
}

#[test]
fn test_income_mode_with_splitting_and_soli() {
    let mut tax_inputs = TaxInputs {
        tax_input_mode: TaxInputMode::Income,
        taxable_income: dec!(300000),
        ..TaxInputs::default()
    };
    assert_eq!(tax::effective_marginal_rate(&tax_inputs), dec!(45));

    tax_inputs.joint_tax_declaration = true;
    assert_eq!(tax::effective_marginal_rate(&tax_inputs), dec!(42));

    tax_inputs.include_soli = true;
    assert_eq!(tax::effective_marginal_rate(&tax_inputs), dec!(44.31));
}

#[test]
fn test_tax_inputs_partial_json_fills_defaults() {
    let json = r#"{
        "property": {
            "purchase_price": "300000", "state_code": "BE", "state_tax_rate": "6.0",
            "notary_rate": "1.5", "land_registry_rate": "0.5", "broker_rate": "3.57",
            "include_broker": true
        },
        "financing": { "equity": "60000", "interest_rate": "3.5", "repayment_rate": "2.0" },
        "rental": { "monthly_rent": "1100", "monthly_hausgeld": "120", "maintenance_reserve": "50" },
        "tax": { "tax_input_mode": "income", "taxable_income": "150000", "include_soli": true }
    }"#;
    let input: InvestmentInput = serde_json::from_str(json).unwrap();
    let tax_inputs = input.tax.clone().unwrap();

    assert_eq!(input.rental.vacancy_rate, Decimal::ZERO);
    assert_eq!(tax_inputs.depreciation_rate, dec!(2));
    assert_eq!(tax_inputs.tax_input_mode, TaxInputMode::Income);
    assert_eq!(
        analyze_investment(&input).result.tax.effective_marginal_rate,
        dec!(44.31)
    );
}

// ===========================================================================
// Reference data
// ===========================================================================

#[test]
fn test_unknown_state_rejected() {
    let err = PropertyInputs::for_state("ZZ", dec!(100000)).unwrap_err();
    assert!(matches!(err, ImmoError::UnknownState { .. }));
    assert!(resolve_state("NW").is_ok());
}

// ===========================================================================
// Session
// ===========================================================================

#[test]
fn test_session_follows_input_changes() {
    let mut session = InvestmentSession::new(berlin_flat());
    let before = session.metrics().cash_flow.monthly_cash_flow;

    session.update(|input| input.rental.monthly_rent = dec!(1200));
    let after = session.metrics().cash_flow.monthly_cash_flow;

    assert_eq!(after - before, dec!(100));
    assert_eq!(session.derivations(), 2);

    session.update(|input| input.rental.monthly_rent = dec!(1200));
    session.metrics();
    assert_eq!(session.derivations(), 2);
}
