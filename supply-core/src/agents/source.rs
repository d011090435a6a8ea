use std::fmt;
use std::sync::Arc;

use crate::bidding::{bid_bound, build_bids};
use crate::config::SourceConfig;
use crate::error::{ConfigError, ScheduleError};
use crate::exchange::{BidPortfolio, CommodityRequests, Trade, TradeResponse};
use crate::fulfillment::fulfill_trades;
use crate::inventory::InventoryLedger;
use crate::material::{Composition, RecipeBook};
use crate::schedule::CapacitySchedule;
use crate::telemetry;
use crate::types::{AgentId, Quantity};

use super::{EnterContext, Lifecycle, Positioned, Supplier};

/// Where a [`SupplyAgent`] is in its lifecycle.
///
/// Per period the kernel drives `Active → CapacityResolved → Bidding → Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built from config, not yet in a running simulation.
    Configured,
    /// Between periods, or after trades were fulfilled.
    Active,
    /// Capacity for the current period is known.
    CapacityResolved,
    /// Bids were requested this period; trades may follow.
    Bidding,
    /// Active lifetime has elapsed.
    Retired,
}

/// Supplies one commodity up to a per-period capacity from a finite inventory.
#[derive(Debug, Clone)]
pub struct SupplyAgent {
    id: AgentId,
    config: SourceConfig,
    recipe: Option<Arc<Composition>>,
    schedule: CapacitySchedule,
    inventory: InventoryLedger,
    phase: Phase,
    enter_time: u64,
    active_lifetime: u64,
    /// Simulation time of the current period.
    now: u64,
    current_capacity: Quantity,
}

impl SupplyAgent {
    pub fn new(id: AgentId, config: SourceConfig, recipes: &RecipeBook) -> Result<Self, ConfigError> {
        config.validate()?;

        let recipe = if config.has_recipe() {
            let comp = recipes
                .get(&config.outrecipe)
                .ok_or_else(|| ConfigError::UnknownRecipe {
                    prototype: config.prototype.clone(),
                    recipe: config.outrecipe.clone(),
                })?;
            Some(comp)
        } else {
            None
        };

        Ok(Self {
            id,
            schedule: CapacitySchedule::new(config.throughput.clone()),
            inventory: InventoryLedger::new(config.inventory_size),
            config,
            recipe,
            phase: Phase::Configured,
            enter_time: 0,
            active_lifetime: 0,
            now: 0,
            current_capacity: 0.0,
        })
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn prototype(&self) -> &str {
        &self.config.prototype
    }

    pub fn commodity(&self) -> &str {
        &self.config.outcommod
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn schedule(&self) -> &CapacitySchedule {
        &self.schedule
    }

    pub fn current_capacity(&self) -> Quantity {
        self.current_capacity
    }

    pub fn remaining_inventory(&self) -> Quantity {
        self.inventory.remaining()
    }

    /// Periods elapsed since entry, once the agent is in the simulation.
    pub fn period(&self) -> Option<u64> {
        match self.phase {
            Phase::Configured => None,
            _ => Some(self.now.saturating_sub(self.enter_time)),
        }
    }

    pub fn active_lifetime(&self) -> Option<u64> {
        match self.phase {
            Phase::Configured => None,
            _ => Some(self.active_lifetime),
        }
    }

    pub fn is_retired(&self) -> bool {
        self.phase == Phase::Retired
    }

    fn archetype(&self) -> String {
        format!(":supply_core:{}", self.config.prototype)
    }
}

impl Lifecycle for SupplyAgent {
    type Error = ScheduleError;

    /// Fixes the active lifetime and expands the throughput schedule against
    /// it. A schedule error leaves the agent `Configured`.
    fn enter(&mut self, ctx: &EnterContext) -> Result<(), ScheduleError> {
        assert_eq!(
            self.phase,
            Phase::Configured,
            "agent '{}' entered the simulation twice",
            self.config.prototype
        );

        let lifetime = ctx.active_lifetime(self.config.lifetime);
        self.schedule.configure(&self.config.prototype, lifetime as usize)?;

        self.enter_time = ctx.enter_time;
        self.now = ctx.enter_time;
        self.active_lifetime = lifetime;
        self.phase = Phase::Active;

        telemetry::record_position(
            self.id,
            &self.config.prototype,
            &self.archetype(),
            self.config.latitude,
            self.config.longitude,
        );
        #[cfg(feature = "instrument")]
        tracing::debug!(
            prototype = %self.config.prototype,
            enter_time = ctx.enter_time,
            lifetime,
            "source entered simulation"
        );
        Ok(())
    }

    fn tick(&mut self, now: u64) {
        match self.phase {
            Phase::Retired => return,
            Phase::Configured => panic!(
                "agent '{}' ticked before entering the simulation",
                self.config.prototype
            ),
            _ => {}
        }
        assert!(now >= self.enter_time, "tick at {now} precedes entry at {}", self.enter_time);

        self.now = now;
        let period = now - self.enter_time;
        if period >= self.active_lifetime {
            self.phase = Phase::Retired;
            #[cfg(feature = "instrument")]
            tracing::debug!(prototype = %self.config.prototype, now, "source retired");
            return;
        }

        self.current_capacity = self.schedule.capacity_at(period as usize);
        self.phase = Phase::CapacityResolved;
    }

    fn tock(&mut self, _now: u64) {}
}

impl Supplier for SupplyAgent {
    fn produces(&self, commodity: &str) -> bool {
        self.config.outcommod == commodity
    }

    fn capacity(&self, commodity: &str) -> Option<Quantity> {
        if !self.produces(commodity) {
            return None;
        }
        match self.phase {
            Phase::CapacityResolved | Phase::Bidding | Phase::Active => Some(self.current_capacity),
            Phase::Configured | Phase::Retired => None,
        }
    }

    /// Publishes this period's bound, then bids on every request for our
    /// commodity. Outside a resolved period there is nothing to offer.
    fn bid(&mut self, requests: &CommodityRequests) -> Option<BidPortfolio> {
        if !matches!(self.phase, Phase::CapacityResolved | Phase::Bidding) {
            #[cfg(feature = "instrument")]
            tracing::debug!(
                prototype = %self.config.prototype,
                phase = ?self.phase,
                "bid requested outside a resolved period"
            );
            return None;
        }
        self.phase = Phase::Bidding;

        let max_qty = bid_bound(self.current_capacity, self.inventory.remaining());
        telemetry::record_time_series(
            self.id,
            &telemetry::supply_series(&self.config.outcommod),
            self.now,
            max_qty,
        );
        #[cfg(feature = "instrument")]
        tracing::debug!(
            prototype = %self.config.prototype,
            commodity = %self.config.outcommod,
            max_qty,
            "bidding up to capacity"
        );

        build_bids(
            self.id,
            &self.config.outcommod,
            requests,
            self.current_capacity,
            self.inventory.remaining(),
            self.recipe.as_ref(),
        )
    }

    fn fulfill(&mut self, trades: &[Trade]) -> Vec<TradeResponse> {
        if trades.is_empty() {
            if self.phase == Phase::Bidding {
                self.phase = Phase::Active;
            }
            return Vec::new();
        }
        assert_eq!(
            self.phase,
            Phase::Bidding,
            "agent '{}' received trades without bidding this period",
            self.config.prototype
        );

        let responses = fulfill_trades(self.id, &mut self.inventory, trades, self.recipe.as_ref());
        #[cfg(feature = "instrument")]
        for response in &responses {
            tracing::debug!(
                prototype = %self.config.prototype,
                commodity = %self.config.outcommod,
                qty = response.material.quantity,
                "sent an order"
            );
        }
        self.phase = Phase::Active;
        responses
    }
}

impl Positioned for SupplyAgent {
    fn latitude(&self) -> f64 {
        self.config.latitude
    }

    fn longitude(&self) -> f64 {
        self.config.longitude
    }
}

impl fmt::Display for SupplyAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} supplies commodity '{}' with recipe '{}' at a current throughput of {} kg per time step, {} kg remaining",
            self.config.prototype,
            self.config.outcommod,
            self.config.outrecipe,
            self.current_capacity,
            self.inventory.remaining()
        )
    }
}
