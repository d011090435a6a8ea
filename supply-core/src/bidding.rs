use std::sync::Arc;

use crate::exchange::{BidOffer, BidPortfolio, CapacityConstraint, CommodityRequests};
use crate::material::{Composition, Material};
use crate::types::{AgentId, EPS, Quantity};

/// Most an agent can hand over this period.
pub fn bid_bound(capacity: Quantity, inventory: Quantity) -> Quantity {
    capacity.min(inventory)
}

/// Build one bid per request for `commodity`, all sharing one capacity constraint.
///
/// Each bid offers the requested quantity clamped to `[0, bound]`. The offered
/// composition is `recipe` when the agent has one, otherwise whatever the
/// requester asked for. Returns `None` when there is nothing to offer or
/// nobody asked for the commodity.
pub fn build_bids(
    bidder: AgentId,
    commodity: &str,
    requests: &CommodityRequests,
    capacity: Quantity,
    inventory: Quantity,
    recipe: Option<&Arc<Composition>>,
) -> Option<BidPortfolio> {
    let max_qty = bid_bound(capacity, inventory);
    if max_qty < EPS {
        return None;
    }
    let requests = requests.get(commodity).filter(|r| !r.is_empty())?;

    let bids = requests
        .iter()
        .map(|req| {
            let qty = req.target.quantity.clamp(0.0, max_qty);
            let composition = match recipe {
                Some(comp) => Arc::clone(comp),
                None => Arc::clone(&req.target.composition),
            };
            BidOffer {
                request: Arc::clone(req),
                offer: Material::untracked(qty, composition),
                bidder,
            }
        })
        .collect();

    Some(BidPortfolio {
        bidder,
        commodity: commodity.to_string(),
        bids,
        constraint: CapacityConstraint::new(max_qty),
    })
}
