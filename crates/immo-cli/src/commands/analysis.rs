use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use immo_core::analysis::inputs::{
    DEFAULT_BROKER_RATE, DEFAULT_LAND_REGISTRY_RATE, DEFAULT_NOTARY_RATE,
};
use immo_core::analysis::{
    analyze_investment, FinancingInputs, InvestmentInput, PropertyInputs, RentalInputs,
    TaxInputMode, TaxInputs,
};
use immo_core::reference::states::resolve_state;

use super::required;
use crate::input;

/// Arguments for a buy-to-let analysis
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AnalyzeArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price in euros
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Two-letter state code, e.g. BE, BY, NW
    #[arg(long)]
    pub state: Option<String>,

    /// Notary fees, percent of price
    #[arg(long)]
    pub notary_rate: Option<Decimal>,

    /// Land registry fees, percent of price
    #[arg(long)]
    pub land_registry_rate: Option<Decimal>,

    /// Broker commission incl. VAT, percent of price
    #[arg(long)]
    pub broker_rate: Option<Decimal>,

    /// Purchase without a broker
    #[arg(long)]
    pub no_broker: bool,

    /// Own capital
    #[arg(long)]
    pub equity: Option<Decimal>,

    /// Nominal interest rate, percent p.a.
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Initial repayment rate, percent p.a.
    #[arg(long)]
    pub repayment_rate: Option<Decimal>,

    /// Monthly cold rent
    #[arg(long)]
    pub rent: Option<Decimal>,

    /// Monthly non-recoverable Hausgeld
    #[arg(long, default_value = "0")]
    pub hausgeld: Decimal,

    /// Monthly maintenance reserve
    #[arg(long, default_value = "0")]
    pub maintenance: Decimal,

    /// Vacancy, percent of rent
    #[arg(long, default_value = "0")]
    pub vacancy: Decimal,

    /// Marginal income-tax rate, percent (enables the tax view)
    #[arg(long, conflicts_with = "taxable_income")]
    pub marginal_rate: Option<Decimal>,

    /// Taxable income; the marginal rate is derived from the tax brackets
    #[arg(long)]
    pub taxable_income: Option<Decimal>,

    /// Joint declaration (income splitting)
    #[arg(long)]
    pub joint: bool,

    /// Add the solidarity surcharge
    #[arg(long)]
    pub soli: bool,

    /// Building depreciation (AfA), percent p.a.
    #[arg(long)]
    pub depreciation_rate: Option<Decimal>,

    /// Land share of the acquisition cost, percent
    #[arg(long)]
    pub land_value_percent: Option<Decimal>,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let investment: InvestmentInput = match input::from_file_or_stdin(args.input.as_deref())? {
        Some(investment) => investment,
        None => investment_from_flags(&args)?,
    };

    let result = analyze_investment(&investment);
    Ok(serde_json::to_value(result)?)
}

/// Assemble the input set from individual flags.
pub fn investment_from_flags(
    args: &AnalyzeArgs,
) -> Result<InvestmentInput, Box<dyn std::error::Error>> {
    let code = args
        .state
        .as_deref()
        .ok_or("--state is required (or provide --input)")?;
    let state = resolve_state(&code.to_uppercase())?;

    let property = PropertyInputs {
        purchase_price: required(args.price, "price")?,
        state_code: state.code.to_string(),
        state_tax_rate: state.tax_rate,
        notary_rate: args.notary_rate.unwrap_or(DEFAULT_NOTARY_RATE),
        land_registry_rate: args.land_registry_rate.unwrap_or(DEFAULT_LAND_REGISTRY_RATE),
        broker_rate: args.broker_rate.unwrap_or(DEFAULT_BROKER_RATE),
        include_broker: !args.no_broker,
    };

    let financing = FinancingInputs {
        equity: required(args.equity, "equity")?,
        interest_rate: required(args.interest_rate, "interest-rate")?,
        repayment_rate: required(args.repayment_rate, "repayment-rate")?,
    };

    let rental = RentalInputs {
        monthly_rent: required(args.rent, "rent")?,
        monthly_hausgeld: args.hausgeld,
        maintenance_reserve: args.maintenance,
        vacancy_rate: args.vacancy,
    };

    Ok(InvestmentInput {
        property,
        financing,
        rental,
        tax: tax_from_flags(args),
    })
}

/// Any tax flag switches the tax view on; unset values keep their defaults.
fn tax_from_flags(args: &AnalyzeArgs) -> Option<TaxInputs> {
    let any_set = args.marginal_rate.is_some()
        || args.taxable_income.is_some()
        || args.depreciation_rate.is_some()
        || args.land_value_percent.is_some()
        || args.joint
        || args.soli;
    if !any_set {
        return None;
    }

    let defaults = TaxInputs::default();
    let (tax_input_mode, taxable_income) = match args.taxable_income {
        Some(income) => (TaxInputMode::Income, income),
        None => (TaxInputMode::Rate, defaults.taxable_income),
    };

    Some(TaxInputs {
        depreciation_rate: args.depreciation_rate.unwrap_or(defaults.depreciation_rate),
        land_value_percent: args.land_value_percent.unwrap_or(defaults.land_value_percent),
        tax_input_mode,
        marginal_tax_rate: args.marginal_rate.unwrap_or(defaults.marginal_tax_rate),
        taxable_income,
        include_soli: args.soli,
        joint_tax_declaration: args.joint,
    })
}
