use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Quantity, UNLIMITED};

/// Parameters of one supply-agent prototype.
///
/// Everything except `outcommod` has a default, so a config can be as small as
/// `{"outcommod": "fuel"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Prototype name, used in diagnostics.
    pub prototype: String,
    /// Commodity this agent offers.
    pub outcommod: String,
    /// Recipe supplied regardless of what is requested; empty means supply
    /// whatever composition is requested.
    pub outrecipe: String,
    /// Total material this agent can ever supply, in kg.
    pub inventory_size: Quantity,
    /// Maximum supply per period, in kg. One entry applies to every period;
    /// otherwise one entry per period of the active lifetime.
    pub throughput: Vec<Quantity>,
    /// Degrees.
    pub latitude: f64,
    /// Degrees.
    pub longitude: f64,
    /// Active periods; `None` runs until the end of the simulation.
    pub lifetime: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            prototype: "Source".to_string(),
            outcommod: String::new(),
            outrecipe: String::new(),
            inventory_size: UNLIMITED,
            throughput: vec![UNLIMITED],
            latitude: 0.0,
            longitude: 0.0,
            lifetime: None,
        }
    }
}

impl SourceConfig {
    pub fn new(prototype: impl Into<String>, outcommod: impl Into<String>) -> Self {
        Self {
            prototype: prototype.into(),
            outcommod: outcommod.into(),
            ..Self::default()
        }
    }

    pub fn with_recipe(mut self, recipe: impl Into<String>) -> Self {
        self.outrecipe = recipe.into();
        self
    }

    pub fn with_inventory(mut self, inventory_size: Quantity) -> Self {
        self.inventory_size = inventory_size;
        self
    }

    pub fn with_throughput(mut self, throughput: Vec<Quantity>) -> Self {
        self.throughput = throughput;
        self
    }

    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_lifetime(mut self, lifetime: u64) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Field-level checks. The throughput schedule is validated when the
    /// agent enters the simulation, once its lifetime is known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.outcommod.trim().is_empty() {
            return Err(ConfigError::MissingCommodity {
                prototype: self.prototype.clone(),
            });
        }
        if !(0.0..=UNLIMITED).contains(&self.inventory_size) {
            return Err(ConfigError::InvalidInventory {
                prototype: self.prototype.clone(),
                value: self.inventory_size,
            });
        }
        Ok(())
    }

    pub fn has_recipe(&self) -> bool {
        !self.outrecipe.is_empty()
    }
}
