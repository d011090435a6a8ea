// Nuclide compositions carried by materials

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// === NUCLIDE ===

/// Nuclide identifier in `ZZZAAAMMMM` form (e.g. U-235 = 922350000).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Nuclide(pub u32);

impl Nuclide {
    pub const U235: Nuclide = Nuclide(922_350_000);
    pub const U238: Nuclide = Nuclide(922_380_000);
}

// === COMPOSITION ===

/// Mass fractions by nuclide, normalized to sum to 1.
///
/// An empty composition is allowed and stays empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    fractions: BTreeMap<Nuclide, f64>,
}

impl Composition {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from relative masses; non-positive entries are dropped.
    pub fn from_mass(masses: impl IntoIterator<Item = (Nuclide, f64)>) -> Self {
        let mut fractions: BTreeMap<Nuclide, f64> = BTreeMap::new();
        for (nuc, mass) in masses {
            if mass > 0.0 {
                *fractions.entry(nuc).or_insert(0.0) += mass;
            }
        }

        let total: f64 = fractions.values().sum();
        if total > 0.0 {
            for frac in fractions.values_mut() {
                *frac /= total;
            }
        }
        Self { fractions }
    }

    pub fn fraction(&self, nuc: Nuclide) -> f64 {
        self.fractions.get(&nuc).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    pub fn nuclides(&self) -> impl Iterator<Item = (Nuclide, f64)> + '_ {
        self.fractions.iter().map(|(n, f)| (*n, *f))
    }
}
