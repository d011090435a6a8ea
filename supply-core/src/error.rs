//! Startup validation errors.
//!
//! Per-period operations never fail; broken caller invariants (over-debiting
//! inventory, reading capacity outside the active lifetime) panic instead.

use thiserror::Error;

/// One problem found in a throughput schedule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleViolation {
    /// More than one value was supplied, but not one per active period.
    #[error("prototype '{prototype}' has {supplied} throughput vals, expected {expected}")]
    Length {
        prototype: String,
        supplied: usize,
        expected: usize,
    },

    /// Negative, non-finite, or above the unlimited sentinel.
    #[error("prototype '{prototype}' has invalid value {value} in position {index} of throughput")]
    Value {
        prototype: String,
        index: usize,
        value: f64,
    },
}

/// Every violation found while configuring a schedule, reported together.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", render_violations(.violations))]
pub struct ScheduleError {
    pub violations: Vec<ScheduleViolation>,
}

fn render_violations(violations: &[ScheduleViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ScheduleError {
    /// `(supplied, expected)` if the length check failed.
    pub fn length_mismatch(&self) -> Option<(usize, usize)> {
        self.violations.iter().find_map(|v| match v {
            ScheduleViolation::Length {
                supplied, expected, ..
            } => Some((*supplied, *expected)),
            ScheduleViolation::Value { .. } => None,
        })
    }

    /// `(index, value)` of every rejected entry, in schedule order.
    pub fn invalid_entries(&self) -> Vec<(usize, f64)> {
        self.violations
            .iter()
            .filter_map(|v| match v {
                ScheduleViolation::Value { index, value, .. } => Some((*index, *value)),
                ScheduleViolation::Length { .. } => None,
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse source config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("prototype '{prototype}' has no output commodity")]
    MissingCommodity { prototype: String },

    #[error("prototype '{prototype}' has invalid inventory size {value}")]
    InvalidInventory { prototype: String, value: f64 },

    #[error("prototype '{prototype}' refers to unknown recipe '{recipe}'")]
    UnknownRecipe { prototype: String, recipe: String },
}
