//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a warehouse held by the registry.
///
/// Allocated from a monotonic counter starting at 1; never reused within a
/// process lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(NonZeroU64);

impl WarehouseId {
    /// The first identifier handed out by a fresh registry.
    pub const FIRST: WarehouseId = WarehouseId(NonZeroU64::MIN);

    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The identifier following this one, or `None` on counter exhaustion.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<WarehouseId> for u64 {
    fn from(value: WarehouseId) -> Self {
        value.get()
    }
}

impl FromStr for WarehouseId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = NonZeroU64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("WarehouseId: {e}")))?;
        Ok(Self(raw))
    }
}
