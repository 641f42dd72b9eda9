use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::reference::states::resolve_state;
use crate::types::{Money, Percent};
use crate::ImmoResult;

/// Customary notary fee in Germany (percent of price).
pub const DEFAULT_NOTARY_RATE: Percent = dec!(1.5);
/// Customary land registry (Grundbuch) fee (percent of price).
pub const DEFAULT_LAND_REGISTRY_RATE: Percent = dec!(0.5);
/// Customary broker commission including VAT (percent of price).
pub const DEFAULT_BROKER_RATE: Percent = dec!(3.57);

/// Property and acquisition-cost inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInputs {
    /// Purchase price in euros
    pub purchase_price: Money,
    /// Two-letter code of the state the property is in
    pub state_code: String,
    /// Transfer tax (Grunderwerbsteuer), percent
    pub state_tax_rate: Percent,
    /// Notary fees, percent
    pub notary_rate: Percent,
    /// Land registry fees, percent
    pub land_registry_rate: Percent,
    /// Broker commission, percent
    pub broker_rate: Percent,
    /// Whether a broker fee is payable at all
    pub include_broker: bool,
}

impl PropertyInputs {
    /// Inputs for a purchase in the given state, using the state's transfer
    /// tax rate and customary fee rates.
    pub fn for_state(state_code: &str, purchase_price: Money) -> ImmoResult<Self> {
        let state = resolve_state(state_code)?;
        Ok(Self {
            purchase_price,
            state_code: state.code.to_string(),
            state_tax_rate: state.tax_rate,
            notary_rate: DEFAULT_NOTARY_RATE,
            land_registry_rate: DEFAULT_LAND_REGISTRY_RATE,
            broker_rate: DEFAULT_BROKER_RATE,
            include_broker: true,
        })
    }
}

/// Equity and loan terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingInputs {
    /// Own capital brought into the purchase
    pub equity: Money,
    /// Nominal annual interest rate, percent
    pub interest_rate: Percent,
    /// Initial annual repayment rate (anfängliche Tilgung), percent
    pub repayment_rate: Percent,
}

/// Rent and running costs, all monthly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalInputs {
    /// Cold rent per month
    pub monthly_rent: Money,
    /// Non-recoverable share of the condominium fee (Hausgeld)
    pub monthly_hausgeld: Money,
    /// Monthly maintenance reserve
    pub maintenance_reserve: Money,
    /// Share of rent lost to vacancy, percent
    #[serde(default)]
    pub vacancy_rate: Percent,
}

/// How the marginal income-tax rate is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxInputMode {
    /// Use `marginal_tax_rate` directly
    #[default]
    Rate,
    /// Derive the rate from `taxable_income` via the bracket formula
    Income,
}

/// Inputs for the rental-income tax analysis.
///
/// Missing fields fall back to the defaults used when no tax analysis is
/// requested at all: 2% depreciation, 20% land share, 42% marginal rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInputs {
    /// Annual building depreciation (AfA), percent
    pub depreciation_rate: Percent,
    /// Land share of the acquisition cost, percent (not depreciable)
    pub land_value_percent: Percent,
    pub tax_input_mode: TaxInputMode,
    /// Marginal income-tax rate, percent (mode `rate`)
    pub marginal_tax_rate: Percent,
    /// Taxable income before the rental result (mode `income`)
    pub taxable_income: Money,
    /// Add the solidarity surcharge
    pub include_soli: bool,
    /// Joint declaration (income splitting)
    pub joint_tax_declaration: bool,
}

impl Default for TaxInputs {
    fn default() -> Self {
        Self {
            depreciation_rate: dec!(2),
            land_value_percent: dec!(20),
            tax_input_mode: TaxInputMode::Rate,
            marginal_tax_rate: dec!(42),
            taxable_income: Decimal::ZERO,
            include_soli: false,
            joint_tax_declaration: false,
        }
    }
}

/// Complete input set for an investment analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub property: PropertyInputs,
    pub financing: FinancingInputs,
    pub rental: RentalInputs,
    /// `None` runs the analysis without a tax view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<TaxInputs>,
}
