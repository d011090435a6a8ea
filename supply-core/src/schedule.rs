// Per-period throughput limits

use crate::error::{ScheduleError, ScheduleViolation};
use crate::types::{Quantity, UNLIMITED};

/// Maximum supply per period of an agent's active lifetime.
///
/// Built from config as either one value per period or a single value for all
/// periods. The single-value form can only be expanded once the active
/// lifetime is known, so [`CapacitySchedule::configure`] runs when the agent
/// enters the simulation. After that the schedule is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacitySchedule {
    values: Vec<Quantity>,
    configured: bool,
}

impl Default for CapacitySchedule {
    fn default() -> Self {
        Self::new(vec![UNLIMITED])
    }
}

impl CapacitySchedule {
    pub fn new(values: Vec<Quantity>) -> Self {
        Self {
            values,
            configured: false,
        }
    }

    /// Expand and validate against the agent's active lifetime.
    ///
    /// Length and value problems are all collected into one error. On error
    /// the schedule is left unconfigured.
    pub fn configure(&mut self, prototype: &str, active_lifetime: usize) -> Result<(), ScheduleError> {
        assert!(!self.configured, "schedule for '{prototype}' configured twice");

        let values = if self.values.len() == 1 {
            vec![self.values[0]; active_lifetime]
        } else {
            self.values.clone()
        };

        let mut violations = Vec::new();
        if values.len() != active_lifetime {
            violations.push(ScheduleViolation::Length {
                prototype: prototype.to_string(),
                supplied: values.len(),
                expected: active_lifetime,
            });
        }
        // Single-value schedules are checked even when the lifetime is zero
        let checked = if self.values.len() == 1 { &self.values } else { &values };
        for (index, &value) in checked.iter().enumerate() {
            if !is_valid_capacity(value) {
                violations.push(ScheduleViolation::Value {
                    prototype: prototype.to_string(),
                    index,
                    value,
                });
            }
        }

        if !violations.is_empty() {
            return Err(ScheduleError { violations });
        }

        self.values = values;
        self.configured = true;
        Ok(())
    }

    /// Capacity `period` periods after activation.
    pub fn capacity_at(&self, period: usize) -> Quantity {
        assert!(self.configured, "capacity read before schedule was configured");
        assert!(
            period < self.values.len(),
            "period {period} outside active lifetime of {} periods",
            self.values.len()
        );
        self.values[period]
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Quantity] {
        &self.values
    }
}

fn is_valid_capacity(value: Quantity) -> bool {
    (0.0..=UNLIMITED).contains(&value)
}
