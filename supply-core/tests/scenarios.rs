//! Whole-run scenarios for a single source feeding a sink.

mod common;

use common::{MockSim, generic_recipe};
use supply_core::{Phase, SourceConfig, Supplier};

fn source_config(throughput: Vec<f64>) -> SourceConfig {
    SourceConfig::new("source", "commod")
        .with_recipe("genericRecipe")
        .with_throughput(throughput)
}

#[test]
fn scenario_multi_period_schedule() {
    let mut sim = MockSim::new(3);
    sim.add_recipe("genericRecipe", generic_recipe());
    sim.add_sink("commod", 10.0);
    let mut source = sim.add_source(source_config(vec![1.0, 2.0, 3.0])).unwrap();

    let log = sim.run(&mut source).unwrap();

    let bounds: Vec<Option<f64>> = log.iter().map(|p| p.bound).collect();
    assert_eq!(bounds, vec![Some(1.0), Some(2.0), Some(3.0)]);
    let delivered: Vec<f64> = sim.sinks[0].received.iter().map(|m| m.quantity).collect();
    assert_eq!(delivered, vec![1.0, 2.0, 3.0]);
}

#[test]
fn scenario_single_value_schedule() {
    let mut sim = MockSim::new(3);
    sim.add_recipe("genericRecipe", generic_recipe());
    sim.add_sink("commod", 10.0);
    let mut source = sim.add_source(source_config(vec![1.0])).unwrap();

    let log = sim.run(&mut source).unwrap();

    assert_eq!(log.len(), 3);
    assert!(log.iter().all(|p| p.bound == Some(1.0)));
    assert_eq!(source.schedule().values(), &[1.0, 1.0, 1.0]);
}

#[test]
fn scenario_inventory_exhausted_mid_run() {
    let mut sim = MockSim::new(4);
    sim.add_sink("commod", 10.0);
    let config = SourceConfig::new("source", "commod")
        .with_inventory(5.0)
        .with_throughput(vec![3.0]);
    let mut source = sim.add_source(config).unwrap();

    let log = sim.run(&mut source).unwrap();

    let traded: Vec<f64> = log.iter().flat_map(|p| p.traded.iter().copied()).collect();
    assert_eq!(traded, vec![3.0, 2.0]);
    assert_eq!(log[1].bound, Some(2.0));
    assert_eq!(log[2].bound, None);
    assert_eq!(source.remaining_inventory(), 0.0);
}

#[test]
fn scenario_two_trades_exhaust_inventory() {
    let mut sim = MockSim::new(1);
    sim.add_sink("commod", 3.0);
    sim.add_sink("commod", 2.0);
    let config = SourceConfig::new("source", "commod").with_inventory(5.0);
    let mut source = sim.add_source(config).unwrap();

    let log = sim.run(&mut source).unwrap();

    assert_eq!(log[0].traded, vec![3.0, 2.0]);
    assert_eq!(sim.sinks[0].received[0].quantity, 3.0);
    assert_eq!(sim.sinks[1].received[0].quantity, 2.0);
    assert_eq!(source.remaining_inventory(), 0.0);
}

#[test]
fn scenario_other_commodity_gets_nothing() {
    let mut sim = MockSim::new(2);
    sim.add_sink("other", 10.0);
    let mut source = sim.add_source(SourceConfig::new("source", "commod")).unwrap();

    let log = sim.run(&mut source).unwrap();

    assert!(log.iter().all(|p| p.bound.is_none() && p.traded.is_empty()));
    assert!(sim.sinks[0].received.is_empty());
}

#[test]
fn scenario_mismatched_schedule_aborts_run() {
    let mut sim = MockSim::new(3);
    sim.add_recipe("genericRecipe", generic_recipe());
    sim.add_sink("commod", 10.0);
    let mut source = sim.add_source(source_config(vec![1.0, -2.0])).unwrap();

    let err = sim.run(&mut source).unwrap_err();

    assert_eq!(err.length_mismatch(), Some((2, 3)));
    assert_eq!(err.invalid_entries(), vec![(1, -2.0)]);
    assert_eq!(source.phase(), Phase::Configured);
    assert!(sim.sinks[0].received.is_empty());
}

#[test]
fn scenario_lifetime_shorter_than_simulation() {
    let mut sim = MockSim::new(5);
    sim.add_sink("commod", 1.0);
    let config = SourceConfig::new("source", "commod")
        .with_throughput(vec![4.0, 5.0])
        .with_lifetime(2);
    let mut source = sim.add_source(config).unwrap();

    let log = sim.run(&mut source).unwrap();

    assert_eq!(log.len(), 2);
    assert!(source.is_retired());
    assert_eq!(source.capacity("commod"), None);
}

#[test]
fn scenario_zero_capacity_period_skipped() {
    let mut sim = MockSim::new(3);
    sim.add_sink("commod", 1.0);
    let config = SourceConfig::new("source", "commod").with_throughput(vec![1.0, 0.0, 1.0]);
    let mut source = sim.add_source(config).unwrap();

    let log = sim.run(&mut source).unwrap();

    let bounds: Vec<Option<f64>> = log.iter().map(|p| p.bound).collect();
    assert_eq!(bounds, vec![Some(1.0), None, Some(1.0)]);
    assert_eq!(sim.sinks[0].received.len(), 2);
}

#[test]
fn scenario_mirrors_sink_composition_without_recipe() {
    let mut sim = MockSim::new(1);
    sim.add_sink("commod", 1.0);
    let mut source = sim.add_source(SourceConfig::new("source", "commod")).unwrap();
    sim.run(&mut source).unwrap();

    let sink = &sim.sinks[0];
    assert_eq!(*sink.received[0].composition, *sink.composition);
    assert_eq!(sink.received[0].producer, Some(source.id()));
}
