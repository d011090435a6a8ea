// Named compositions available to agents

use std::collections::HashMap;
use std::sync::Arc;

use super::Composition;

/// Recipe registry, shared by every agent in a simulation.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: HashMap<String, Arc<Composition>>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, name: impl Into<String>, composition: Composition) -> Self {
        self.add(name, composition);
        self
    }

    pub fn add(&mut self, name: impl Into<String>, composition: Composition) {
        self.recipes.insert(name.into(), Arc::new(composition));
    }

    pub fn get(&self, name: &str) -> Option<Arc<Composition>> {
        self.recipes.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }
}
