//! Month-by-month mortgage payoff schedules.

pub mod schedule;

pub use schedule::{
    build_payment_schedule, first_of_month, PaymentSchedule, PaymentScheduleEntry,
    PaymentScheduleSummary, ScheduleInput, MAX_MONTHS, PAYOFF_EPSILON,
};
