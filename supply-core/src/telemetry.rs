//! Observations published for external analysis.
//!
//! Emitted as `INFO` events so the `instrument` subscriber can collect them
//! into tables. Without the `instrument` feature these compile to nothing.

use crate::types::{AgentId, KeyToU64, Quantity};

/// Series name under which an agent publishes its per-period supply bound.
pub fn supply_series(commodity: &str) -> String {
    format!("supply{commodity}")
}

/// Record one value of a named time series.
pub fn record_time_series(agent: AgentId, series: &str, time: u64, value: Quantity) {
    let agent_id = agent.to_u64();
    #[cfg(feature = "instrument")]
    tracing::info!(
        target: "time_series",
        agent_id = agent_id,
        time = time,
        series = series,
        value = value,
    );
    #[cfg(not(feature = "instrument"))]
    let _ = (agent_id, series, time, value);
}

/// Record an agent's fixed geographic position.
pub fn record_position(agent: AgentId, prototype: &str, archetype: &str, latitude: f64, longitude: f64) {
    let agent_id = agent.to_u64();
    #[cfg(feature = "instrument")]
    tracing::info!(
        target: "agent_position",
        agent_id = agent_id,
        prototype = prototype,
        archetype = archetype,
        latitude = latitude,
        longitude = longitude,
    );
    #[cfg(not(feature = "instrument"))]
    let _ = (agent_id, prototype, archetype, latitude, longitude);
}
