use slotmap::new_key_type;

// ============================================================================
// IDs - Using slotmap for generational indices
// ============================================================================

new_key_type! {
    /// Identity of any participant in the exchange (suppliers and requesters).
    pub struct AgentId;
}

/// Trait for converting SlotMap keys to u64 for telemetry rows
pub trait KeyToU64 {
    fn to_u64(self) -> u64;
}

impl KeyToU64 for AgentId {
    fn to_u64(self) -> u64 {
        self.0.as_ffi()
    }
}

// ============================================================================
// Quantities
// ============================================================================

/// Mass of material, in kg.
pub type Quantity = f64;

/// Sentinel for "no limit" on throughput and inventory.
pub const UNLIMITED: Quantity = f64::MAX;

/// Quantities below this are treated as nothing to offer.
pub const EPS: Quantity = 1e-6;
