use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use depot_inventory::WarehouseRegistry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("warehouse registry lock poisoned")]
    LockPoisoned,
}

/// Process-wide application state shared by all handlers.
///
/// Each handler holds the registry lock for its whole read-modify-write
/// sequence, so concurrent add/remove requests on one warehouse serialize.
#[derive(Debug, Default)]
pub struct AppServices {
    registry: RwLock<WarehouseRegistry>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> Result<RwLockReadGuard<'_, WarehouseRegistry>, ServiceError> {
        self.registry.read().map_err(|_| ServiceError::LockPoisoned)
    }

    pub fn registry_mut(&self) -> Result<RwLockWriteGuard<'_, WarehouseRegistry>, ServiceError> {
        self.registry.write().map_err(|_| ServiceError::LockPoisoned)
    }

    /// Drop all warehouses and restart id allocation (test support).
    pub fn reset(&self) -> Result<(), ServiceError> {
        self.registry_mut()?.reset();
        Ok(())
    }
}
