//! Static lookup data: German state transfer-tax rates and income-tax
//! marginal-rate tables.

pub mod states;
pub mod tax_brackets;
