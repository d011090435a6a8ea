//! A capacity-scheduled supply agent for periodic commodity exchanges.
//!
//! Each period a [`SupplyAgent`] resolves its capacity from a
//! [`CapacitySchedule`], bids on demand requests for its commodity under one
//! shared [`CapacityConstraint`], and fulfills whatever trades the external
//! exchange clears, debiting its [`InventoryLedger`].

pub mod agents;
pub mod bidding;
pub mod config;
pub mod error;
pub mod exchange;
pub mod fulfillment;
pub mod inventory;
pub mod material;
pub mod schedule;
pub mod telemetry;
pub mod types;

pub use agents::*;
pub use bidding::{bid_bound, build_bids};
pub use config::SourceConfig;
pub use error::{ConfigError, ScheduleError, ScheduleViolation};
pub use exchange::*;
pub use fulfillment::fulfill_trades;
pub use inventory::InventoryLedger;
pub use material::{Composition, Material, Nuclide, RecipeBook};
pub use schedule::CapacitySchedule;
pub use types::*;

#[cfg(feature = "instrument")]
pub use instrument;
