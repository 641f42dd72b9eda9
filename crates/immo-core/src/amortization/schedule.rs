use chrono::{Datelike, Local, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{monthly, pct, with_metadata, ComputationOutput, Money, Percent};

#[cfg(feature = "analysis")]
use crate::analysis::FinancingMetrics;

/// Hard cap on simulated months (50 years).
pub const MAX_MONTHS: usize = 600;

/// A balance at or below this is treated as paid off.
pub const PAYOFF_EPSILON: Money = dec!(0.01);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Loan terms for a payoff simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub loan_amount: Money,
    /// Fixed instalment (interest plus principal)
    pub monthly_payment: Money,
    /// Nominal annual interest rate, percent
    pub annual_interest_rate: Percent,
    /// Constant monthly extra repayment (Sondertilgung)
    #[serde(default)]
    pub extra_repayment: Money,
    /// First schedule month; defaults to the current month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl ScheduleInput {
    /// Schedule terms from the loan amount and mortgage of an analysis.
    #[cfg(feature = "analysis")]
    pub fn from_financing(
        financing: &FinancingMetrics,
        annual_interest_rate: Percent,
        extra_repayment: Money,
        start_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            loan_amount: financing.loan_amount,
            monthly_payment: financing.monthly_mortgage,
            annual_interest_rate,
            extra_repayment,
            start_date,
        }
    }
}

/// One month of the payoff schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    /// 1-based month number
    pub month: u32,
    /// First day of the month the payment falls in
    pub date: NaiveDate,
    pub interest_payment: Money,
    pub principal_payment: Money,
    /// Sondertilgung actually applied this month
    pub extra_repayment: Money,
    pub total_payment: Money,
    pub remaining_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentScheduleSummary {
    pub total_months: u32,
    pub total_interest_paid: Money,
    pub total_principal_paid: Money,
    pub total_extra_repayment_paid: Money,
    /// The month cap was reached with the loan still outstanding
    pub capped_at_max_months: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub entries: Vec<PaymentScheduleEntry>,
    pub summary: PaymentScheduleSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate the declining-balance payoff of a loan with a fixed instalment
/// and an optional constant extra repayment.
///
/// The simulation stops when the balance is paid off, when the instalment no
/// longer covers the month's interest (the partial schedule is returned), or
/// after [`MAX_MONTHS`]. The final month's principal and extra repayment are
/// scaled down together so the balance lands exactly on zero.
pub fn build_payment_schedule(input: &ScheduleInput) -> ComputationOutput<PaymentSchedule> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let entries = if input.loan_amount <= Decimal::ZERO || input.monthly_payment <= Decimal::ZERO {
        warnings.push("Loan amount or monthly payment is not positive; schedule is empty".into());
        Vec::new()
    } else {
        let start_month = input
            .start_date
            .map(first_of_month)
            .unwrap_or_else(current_month);
        simulate(input, start_month, &mut warnings)
    };

    let summary = summarize(&entries);
    if summary.capped_at_max_months {
        log::warn!(
            "payoff schedule capped at {} months with {} outstanding",
            MAX_MONTHS,
            entries
                .last()
                .map(|e| e.remaining_balance)
                .unwrap_or_default()
        );
        warnings.push(format!(
            "Loan is not paid off within {} months ({} years)",
            MAX_MONTHS,
            MAX_MONTHS / 12
        ));
    }

    let output = PaymentSchedule { entries, summary };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Declining-Balance Annuity Payoff Schedule",
        input,
        warnings,
        elapsed,
        output,
    )
}

/// Normalise a date to the first day of its month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn current_month() -> NaiveDate {
    first_of_month(Local::now().date_naive())
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

fn simulate(
    input: &ScheduleInput,
    start_month: NaiveDate,
    warnings: &mut Vec<String>,
) -> Vec<PaymentScheduleEntry> {
    let annual_rate = pct(input.annual_interest_rate);
    let extra = input.extra_repayment;

    let mut entries = Vec::new();
    let mut balance = input.loan_amount;

    while balance > PAYOFF_EPSILON && entries.len() < MAX_MONTHS {
        let interest = monthly(balance * annual_rate);
        let principal = input.monthly_payment - interest;

        if principal <= Decimal::ZERO {
            log::warn!(
                "instalment {} does not cover interest {} at month {}; stopping",
                input.monthly_payment,
                interest,
                entries.len() + 1
            );
            warnings.push(format!(
                "Monthly payment {} does not cover the interest of {:.2} in month {}; the loan never amortizes",
                input.monthly_payment,
                interest,
                entries.len() + 1
            ));
            break;
        }

        let potential_reduction = principal + extra;
        let (principal_paid, extra_paid, reduction) = if potential_reduction > balance {
            let ratio = balance / potential_reduction;
            (principal * ratio, extra * ratio, balance)
        } else {
            (principal, extra, potential_reduction)
        };

        balance -= reduction;

        let offset = entries.len() as u32;
        entries.push(PaymentScheduleEntry {
            month: offset + 1,
            date: start_month
                .checked_add_months(Months::new(offset))
                .unwrap_or(start_month),
            interest_payment: interest,
            principal_payment: principal_paid,
            extra_repayment: extra_paid,
            total_payment: interest + reduction,
            remaining_balance: balance.max(Decimal::ZERO),
        });
    }

    entries
}

fn summarize(entries: &[PaymentScheduleEntry]) -> PaymentScheduleSummary {
    let capped_at_max_months = entries.len() >= MAX_MONTHS
        && entries
            .last()
            .is_some_and(|e| e.remaining_balance > PAYOFF_EPSILON);

    PaymentScheduleSummary {
        total_months: entries.len() as u32,
        total_interest_paid: entries.iter().map(|e| e.interest_payment).sum(),
        total_principal_paid: entries.iter().map(|e| e.principal_payment).sum(),
        total_extra_repayment_paid: entries.iter().map(|e| e.extra_repayment).sum(),
        capped_at_max_months,
    }
}
