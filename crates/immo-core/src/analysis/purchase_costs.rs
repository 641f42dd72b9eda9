use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inputs::PropertyInputs;
use crate::types::{pct, safe_percent, Money, Percent};

/// Acquisition side costs (Kaufnebenkosten) and the resulting capital need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseCosts {
    /// Grunderwerbsteuer
    pub transfer_tax: Money,
    pub notary_fees: Money,
    pub land_registry_fees: Money,
    /// Zero when no broker is involved
    pub broker_fees: Money,
    pub total_purchase_costs: Money,
    /// Side costs as percent of the purchase price
    pub purchase_costs_rate: Percent,
    /// Price plus side costs
    pub total_investment: Money,
}

pub fn purchase_costs(property: &PropertyInputs) -> PurchaseCosts {
    let price = property.purchase_price;

    let transfer_tax = price * pct(property.state_tax_rate);
    let notary_fees = price * pct(property.notary_rate);
    let land_registry_fees = price * pct(property.land_registry_rate);
    let broker_fees = if property.include_broker {
        price * pct(property.broker_rate)
    } else {
        Decimal::ZERO
    };

    let total_purchase_costs = transfer_tax + notary_fees + land_registry_fees + broker_fees;

    PurchaseCosts {
        transfer_tax,
        notary_fees,
        land_registry_fees,
        broker_fees,
        total_purchase_costs,
        purchase_costs_rate: safe_percent(total_purchase_costs, price),
        total_investment: price + total_purchase_costs,
    }
}
