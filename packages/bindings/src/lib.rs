use napi::Result as NapiResult;
use napi_derive::napi;

use immo_core::analysis::{effective_marginal_rate, InvestmentInput, TaxInputMode, TaxInputs};
use immo_core::amortization::ScheduleInput;
use immo_core::reference::{states, tax_brackets};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_investment(input_json: String) -> NapiResult<String> {
    let input: InvestmentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = immo_core::analysis::analyze_investment(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_payment_schedule(input_json: String) -> NapiResult<String> {
    let input: ScheduleInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = immo_core::amortization::build_payment_schedule(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

/// Takes a tax input group (`taxable_income`, `joint_tax_declaration`,
/// `include_soli`); the rate is always derived from the income.
#[napi]
pub fn marginal_rate_for_income(input_json: String) -> NapiResult<String> {
    let mut tax: TaxInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    tax.tax_input_mode = TaxInputMode::Income;
    serde_json::to_string(&effective_marginal_rate(&tax)).map_err(to_napi_error)
}

#[napi]
pub fn german_states() -> NapiResult<String> {
    serde_json::to_string(&states::GERMAN_STATES[..]).map_err(to_napi_error)
}

#[napi]
pub fn state_by_code(code: String) -> NapiResult<String> {
    let state = states::resolve_state(&code).map_err(to_napi_error)?;
    serde_json::to_string(state).map_err(to_napi_error)
}

#[napi]
pub fn marginal_rate_presets() -> NapiResult<String> {
    serde_json::to_string(&tax_brackets::MARGINAL_RATE_PRESETS[..]).map_err(to_napi_error)
}
