use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use immo_core::amortization::{build_payment_schedule, ScheduleInput};
use immo_core::analysis::{analyze_investment, InvestmentInput};
use immo_core::ImmoError;

use super::required;
use crate::input;

/// Arguments for a mortgage payoff schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON or YAML schedule input file
    #[arg(long, conflicts_with = "from_analysis")]
    pub input: Option<String>,

    /// Derive loan and instalment from an analysis input file
    #[arg(long)]
    pub from_analysis: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Fixed monthly instalment (interest plus principal)
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,

    /// Nominal interest rate, percent p.a.
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Monthly extra repayment (Sondertilgung)
    #[arg(long, default_value = "0")]
    pub extra_repayment: Decimal,

    /// First schedule month, YYYY-MM-DD or YYYY-MM (defaults to the current month)
    #[arg(long)]
    pub start_date: Option<String>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start_date = args.start_date.as_deref().map(parse_start_date).transpose()?;

    let schedule_input = if let Some(ref path) = args.from_analysis {
        let investment: InvestmentInput = input::file::read_input(path)?;
        let metrics = analyze_investment(&investment).result;
        ScheduleInput::from_financing(
            &metrics.financing,
            investment.financing.interest_rate,
            args.extra_repayment,
            start_date,
        )
    } else if let Some(mut from_input) =
        input::from_file_or_stdin::<ScheduleInput>(args.input.as_deref())?
    {
        if start_date.is_some() {
            from_input.start_date = start_date;
        }
        from_input
    } else {
        ScheduleInput {
            loan_amount: required(args.loan_amount, "loan-amount")?,
            monthly_payment: required(args.monthly_payment, "monthly-payment")?,
            annual_interest_rate: required(args.interest_rate, "interest-rate")?,
            extra_repayment: args.extra_repayment,
            start_date,
        }
    };

    let result = build_payment_schedule(&schedule_input);
    Ok(serde_json::to_value(result)?)
}

/// Accepts a full date or a bare month; the schedule only uses the month.
fn parse_start_date(raw: &str) -> Result<NaiveDate, ImmoError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .map_err(|e| ImmoError::DateError(format!("'{}' is not a valid start date: {}", raw, e)))
}
