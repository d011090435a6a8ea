use crate::types::{EPS, Quantity, UNLIMITED};

/// Finite stock an agent can still supply over its whole run.
///
/// Only ever debited. Bids are sized so that no trade can exceed what is
/// left, so an over-debit means the caller broke that guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLedger {
    initial: Quantity,
    remaining: Quantity,
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl InventoryLedger {
    pub fn new(initial: Quantity) -> Self {
        assert!(
            (0.0..=UNLIMITED).contains(&initial),
            "invalid initial inventory {initial}"
        );
        Self {
            initial,
            remaining: initial,
        }
    }

    pub fn unlimited() -> Self {
        Self::new(UNLIMITED)
    }

    pub fn remaining(&self) -> Quantity {
        self.remaining
    }

    pub fn initial(&self) -> Quantity {
        self.initial
    }

    /// Total debited so far.
    pub fn debited(&self) -> Quantity {
        self.initial - self.remaining
    }

    /// Remove `qty` from the remaining stock.
    ///
    /// Overshoot within [`EPS`] is absorbed so float residue from the exchange
    /// cannot drive the balance negative.
    pub fn debit(&mut self, qty: Quantity) {
        assert!(qty >= 0.0, "negative debit {qty}");
        assert!(
            qty <= self.remaining + EPS,
            "debit of {qty} exceeds remaining inventory {}",
            self.remaining
        );
        self.remaining = (self.remaining - qty).max(0.0);
    }
}
