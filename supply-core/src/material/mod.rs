pub mod composition;
pub mod recipe;

pub use composition::{Composition, Nuclide};
pub use recipe::RecipeBook;

use std::sync::Arc;

use crate::types::{AgentId, Quantity};

/// A quantity of some composition.
///
/// Bid offers are untracked (`producer == None`); material handed over in a
/// trade response records the agent that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub quantity: Quantity,
    pub composition: Arc<Composition>,
    pub producer: Option<AgentId>,
}

impl Material {
    pub fn untracked(quantity: Quantity, composition: Arc<Composition>) -> Self {
        Self {
            quantity,
            composition,
            producer: None,
        }
    }

    pub fn produced(producer: AgentId, quantity: Quantity, composition: Arc<Composition>) -> Self {
        Self {
            quantity,
            composition,
            producer: Some(producer),
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.producer.is_some()
    }
}
