// Roles an agent can play, composed by implementing each trait

use crate::exchange::{BidPortfolio, CommodityRequests, Trade, TradeResponse};
use crate::types::Quantity;

/// Timing of an agent's entry into a running simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterContext {
    /// Period at which the agent enters.
    pub enter_time: u64,
    /// Total periods in the simulation.
    pub sim_duration: u64,
}

impl EnterContext {
    pub fn new(enter_time: u64, sim_duration: u64) -> Self {
        Self {
            enter_time,
            sim_duration,
        }
    }

    /// Periods the agent is active: its own lifetime if it has one,
    /// otherwise until the simulation ends.
    pub fn active_lifetime(&self, lifetime: Option<u64>) -> u64 {
        lifetime.unwrap_or_else(|| self.sim_duration.saturating_sub(self.enter_time))
    }
}

/// Participates in the kernel's period loop.
pub trait Lifecycle {
    type Error;

    /// Called once when the agent joins the running simulation.
    fn enter(&mut self, ctx: &EnterContext) -> Result<(), Self::Error>;

    /// Start of period `now`, before any exchange.
    fn tick(&mut self, now: u64);

    /// End of period `now`, after all exchanges.
    fn tock(&mut self, now: u64);
}

/// Offers a commodity into the exchange under a capacity limit.
pub trait Supplier {
    fn produces(&self, commodity: &str) -> bool;

    /// Capacity for `commodity` in the current period, if this agent supplies it.
    fn capacity(&self, commodity: &str) -> Option<Quantity>;

    fn bid(&mut self, requests: &CommodityRequests) -> Option<BidPortfolio>;

    fn fulfill(&mut self, trades: &[Trade]) -> Vec<TradeResponse>;
}

/// Has a fixed geographic position, in degrees.
pub trait Positioned {
    fn latitude(&self) -> f64;

    fn longitude(&self) -> f64;
}
