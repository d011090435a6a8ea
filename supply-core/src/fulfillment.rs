use std::sync::Arc;

use crate::exchange::{Trade, TradeResponse};
use crate::inventory::InventoryLedger;
use crate::material::{Composition, Material};
use crate::types::AgentId;

/// Produce the material for each cleared trade, debiting `ledger` as we go.
///
/// Responses keep the order of `trades`. Each response carries exactly the
/// cleared amount, made from `recipe` when set and otherwise from the
/// composition the requester asked for. Delivering the same trade twice
/// debits twice.
pub fn fulfill_trades(
    producer: AgentId,
    ledger: &mut InventoryLedger,
    trades: &[Trade],
    recipe: Option<&Arc<Composition>>,
) -> Vec<TradeResponse> {
    trades
        .iter()
        .map(|trade| {
            ledger.debit(trade.amount);

            let composition = match recipe {
                Some(comp) => Arc::clone(comp),
                None => Arc::clone(&trade.request.target.composition),
            };
            TradeResponse {
                trade: trade.clone(),
                material: Material::produced(producer, trade.amount, composition),
            }
        })
        .collect()
}
