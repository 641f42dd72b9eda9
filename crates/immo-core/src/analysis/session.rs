//! Owned input set with memoized derived metrics.
//!
//! The session stands in for an input form: callers change one input group
//! at a time and read the metrics back. Metrics are derived on first read
//! and reused until an input actually changes.

use super::inputs::{FinancingInputs, InvestmentInput, PropertyInputs, RentalInputs, TaxInputs};
use super::{derive_metrics, InvestmentMetrics};

#[cfg(feature = "amortization")]
use crate::amortization::{build_payment_schedule, PaymentSchedule, ScheduleInput};
#[cfg(feature = "amortization")]
use crate::types::{ComputationOutput, Money};

#[derive(Debug, Clone)]
pub struct InvestmentSession {
    input: InvestmentInput,
    cached: Option<InvestmentMetrics>,
    derivations: u64,
}

impl InvestmentSession {
    pub fn new(input: InvestmentInput) -> Self {
        Self {
            input,
            cached: None,
            derivations: 0,
        }
    }

    pub fn input(&self) -> &InvestmentInput {
        &self.input
    }

    /// Number of times the metrics were actually derived.
    pub fn derivations(&self) -> u64 {
        self.derivations
    }

    pub fn set_property(&mut self, property: PropertyInputs) {
        self.update(|input| input.property = property);
    }

    pub fn set_financing(&mut self, financing: FinancingInputs) {
        self.update(|input| input.financing = financing);
    }

    pub fn set_rental(&mut self, rental: RentalInputs) {
        self.update(|input| input.rental = rental);
    }

    pub fn set_tax(&mut self, tax: Option<TaxInputs>) {
        self.update(|input| input.tax = tax);
    }

    /// Apply an arbitrary change. The memo is dropped only when the input
    /// differs afterwards.
    pub fn update<F>(&mut self, change: F)
    where
        F: FnOnce(&mut InvestmentInput),
    {
        let before = self.input.clone();
        change(&mut self.input);
        if self.input != before {
            self.cached = None;
        }
    }

    /// Current metrics, derived if any input changed since the last read.
    pub fn metrics(&mut self) -> &InvestmentMetrics {
        if self.cached.is_none() {
            self.derivations += 1;
            log::trace!("deriving investment metrics (#{})", self.derivations);
        }
        let input = &self.input;
        self.cached.get_or_insert_with(|| derive_metrics(input))
    }

    /// Payoff schedule for the current loan amount and monthly mortgage.
    #[cfg(feature = "amortization")]
    pub fn schedule(
        &mut self,
        extra_repayment: Money,
        start_date: Option<chrono::NaiveDate>,
    ) -> ComputationOutput<PaymentSchedule> {
        let interest_rate = self.input.financing.interest_rate;
        let financing = &self.metrics().financing;
        let schedule_input =
            ScheduleInput::from_financing(financing, interest_rate, extra_repayment, start_date);
        build_payment_schedule(&schedule_input)
    }
}
