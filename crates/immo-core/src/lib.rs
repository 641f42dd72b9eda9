//! Buy-to-let investment analysis for German residential property.
//!
//! All amounts are [`rust_decimal::Decimal`]; percentages are whole numbers
//! (3.5 means 3.5%). Computations never fail on numeric edge cases: degenerate
//! inputs yield zeros and a warning in the [`ComputationOutput`] envelope.

pub mod error;
pub mod reference;
pub mod types;

#[cfg(feature = "analysis")]
pub mod analysis;

#[cfg(feature = "amortization")]
pub mod amortization;

pub use error::ImmoError;
pub use types::*;

/// Standard result type for all immo operations
pub type ImmoResult<T> = Result<T, ImmoError>;
