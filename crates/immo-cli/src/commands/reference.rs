use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use immo_core::analysis::{effective_marginal_rate, TaxInputMode, TaxInputs};
use immo_core::reference::states::{resolve_state, GERMAN_STATES};
use immo_core::reference::tax_brackets::MARGINAL_RATE_PRESETS;

/// Arguments for the state listing
#[derive(Args)]
pub struct StatesArgs {
    /// Return a single state by its two-letter code
    #[arg(long)]
    pub code: Option<String>,
}

/// Arguments for the marginal tax rate lookup
#[derive(Args)]
pub struct MarginalRateArgs {
    /// Taxable income in euros
    #[arg(long)]
    pub income: Decimal,

    /// Joint declaration (income splitting)
    #[arg(long)]
    pub joint: bool,

    /// Add the solidarity surcharge
    #[arg(long)]
    pub soli: bool,
}

pub fn run_states(args: StatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match args.code {
        Some(code) => Ok(serde_json::to_value(resolve_state(&code.to_uppercase())?)?),
        None => Ok(serde_json::to_value(&GERMAN_STATES[..])?),
    }
}

pub fn run_marginal_rate(args: MarginalRateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax = TaxInputs {
        tax_input_mode: TaxInputMode::Income,
        taxable_income: args.income,
        include_soli: args.soli,
        joint_tax_declaration: args.joint,
        ..TaxInputs::default()
    };

    Ok(json!({
        "taxable_income": args.income,
        "joint_tax_declaration": args.joint,
        "include_soli": args.soli,
        "marginal_rate": effective_marginal_rate(&tax),
    }))
}

pub fn run_presets() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(&MARGINAL_RATE_PRESETS[..])?)
}
