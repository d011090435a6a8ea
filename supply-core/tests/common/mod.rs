//! Minimal exchange kernel for driving a source through whole runs.
#![allow(dead_code)]

use std::sync::Arc;

use slotmap::SlotMap;
use supply_core::{
    AgentId, BidPortfolio, Composition, CommodityRequests, ConfigError, DemandRequest,
    EPS, EnterContext, Lifecycle, Material, Nuclide, Quantity, RecipeBook, ScheduleError,
    SourceConfig, Supplier, SupplyAgent, Trade,
};

pub fn generic_recipe() -> Composition {
    Composition::from_mass([(Nuclide::U235, 0.5), (Nuclide::U238, 0.5)])
}

/// Requests a fixed quantity of one commodity every period.
pub struct Sink {
    pub id: AgentId,
    pub commodity: String,
    pub demand: Quantity,
    pub composition: Arc<Composition>,
    pub received: Vec<Material>,
}

/// What happened in one period of a run.
#[derive(Debug, Clone, Default)]
pub struct PeriodLog {
    pub time: u64,
    pub bound: Option<Quantity>,
    pub traded: Vec<Quantity>,
}

pub struct MockSim {
    pub duration: u64,
    pub agents: SlotMap<AgentId, ()>,
    pub recipes: RecipeBook,
    pub sinks: Vec<Sink>,
}

impl MockSim {
    pub fn new(duration: u64) -> Self {
        Self {
            duration,
            agents: SlotMap::with_key(),
            recipes: RecipeBook::new(),
            sinks: Vec::new(),
        }
    }

    pub fn add_recipe(&mut self, name: &str, composition: Composition) -> &mut Self {
        self.recipes.add(name, composition);
        self
    }

    pub fn add_sink(&mut self, commodity: &str, demand: Quantity) -> AgentId {
        let id = self.agents.insert(());
        self.sinks.push(Sink {
            id,
            commodity: commodity.to_string(),
            demand,
            composition: Arc::new(Composition::from_mass([(Nuclide::U235, 1.0)])),
            received: Vec::new(),
        });
        id
    }

    pub fn add_source(&mut self, config: SourceConfig) -> Result<SupplyAgent, ConfigError> {
        let id = self.agents.insert(());
        SupplyAgent::new(id, config, &self.recipes)
    }

    fn requests(&self) -> CommodityRequests {
        let mut requests = CommodityRequests::new();
        for sink in &self.sinks {
            let target = Material::untracked(sink.demand, Arc::clone(&sink.composition));
            requests
                .entry(sink.commodity.clone())
                .or_default()
                .push(DemandRequest::new(sink.id, sink.commodity.clone(), target));
        }
        requests
    }

    /// Run the source from time 0 to the end of the simulation.
    pub fn run(&mut self, source: &mut SupplyAgent) -> Result<Vec<PeriodLog>, ScheduleError> {
        source.enter(&EnterContext::new(0, self.duration))?;

        let mut log = Vec::new();
        for time in 0..self.duration {
            source.tick(time);
            if source.is_retired() {
                break;
            }

            let requests = self.requests();
            let portfolio = source.bid(&requests);
            let trades = portfolio.as_ref().map(clear).unwrap_or_default();
            let responses = source.fulfill(&trades);

            for response in responses {
                let requester = response.trade.request.requester;
                if let Some(sink) = self.sinks.iter_mut().find(|s| s.id == requester) {
                    sink.received.push(response.material);
                }
            }
            source.tock(time);

            log.push(PeriodLog {
                time,
                bound: portfolio.map(|p| p.constraint.capacity),
                traded: trades.iter().map(|t| t.amount).collect(),
            });
        }
        Ok(log)
    }
}

/// Accept bids in order until the portfolio's capacity is used up.
pub fn clear(portfolio: &BidPortfolio) -> Vec<Trade> {
    let mut left = portfolio.constraint.capacity;
    let mut trades = Vec::new();
    for bid in &portfolio.bids {
        let amount = bid.offer.quantity.min(left);
        if amount > EPS {
            trades.push(Trade::new(bid, amount));
            left -= amount;
        }
    }
    trades
}
