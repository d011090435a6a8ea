use std::collections::HashMap;
use std::sync::Arc;

use crate::material::Material;
use crate::types::{AgentId, Quantity};

// === REQUESTS ===

/// A requester's demand for some quantity of a commodity.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandRequest {
    pub requester: AgentId,
    pub commodity: String,
    /// Desired quantity and composition.
    pub target: Material,
}

impl DemandRequest {
    pub fn new(requester: AgentId, commodity: impl Into<String>, target: Material) -> Arc<Self> {
        Arc::new(Self {
            requester,
            commodity: commodity.into(),
            target,
        })
    }
}

/// Requests for the current exchange round, grouped by commodity.
pub type CommodityRequests = HashMap<String, Vec<Arc<DemandRequest>>>;

// === BIDS ===

#[derive(Debug, Clone, PartialEq)]
pub struct BidOffer {
    pub request: Arc<DemandRequest>,
    pub offer: Material,
    pub bidder: AgentId,
}

/// Upper bound on the total quantity cleared against one portfolio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityConstraint {
    pub capacity: Quantity,
}

impl CapacityConstraint {
    pub fn new(capacity: Quantity) -> Self {
        Self { capacity }
    }
}

/// All bids an agent makes on one commodity in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct BidPortfolio {
    pub bidder: AgentId,
    pub commodity: String,
    pub bids: Vec<BidOffer>,
    pub constraint: CapacityConstraint,
}

impl BidPortfolio {
    pub fn total_offered(&self) -> Quantity {
        self.bids.iter().map(|b| b.offer.quantity).sum()
    }
}

// === TRADES ===

/// A bid accepted by the exchange for `amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub request: Arc<DemandRequest>,
    pub bid: BidOffer,
    pub amount: Quantity,
}

impl Trade {
    pub fn new(bid: &BidOffer, amount: Quantity) -> Self {
        Self {
            request: Arc::clone(&bid.request),
            bid: bid.clone(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeResponse {
    pub trade: Trade,
    pub material: Material,
}
