//! Owned collection of warehouses keyed by monotonically allocated ids.
//!
//! The registry is a plain value: it does no locking of its own. A
//! multi-threaded host must serialize access (e.g. behind a `RwLock`).

use std::collections::BTreeMap;

use chrono::Utc;

use depot_core::{DomainError, DomainResult, WarehouseId};

use crate::accumulator::BoundedAccumulator;
use crate::warehouse::{Warehouse, WarehouseName};

/// Outcome of adding to a warehouse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Addition {
    /// Amount the caller asked to add.
    pub requested: f64,
    /// Amount that fit; the rest was discarded.
    pub added: f64,
}

#[derive(Debug)]
pub struct WarehouseRegistry {
    warehouses: BTreeMap<WarehouseId, Warehouse>,
    next_id: Option<WarehouseId>,
}

impl Default for WarehouseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self {
            warehouses: BTreeMap::new(),
            next_id: Some(WarehouseId::FIRST),
        }
    }

    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }

    /// All warehouses in ascending id order.
    pub fn list(&self) -> impl Iterator<Item = &Warehouse> {
        self.warehouses.values()
    }

    pub fn get(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.warehouses.get(&id)
    }

    /// Register a new warehouse.
    ///
    /// Capacity and initial balance go through the accumulator's clamping
    /// rules unchanged; rejecting non-positive capacity is the caller's job.
    pub fn create(
        &mut self,
        name: WarehouseName,
        capacity: f64,
        initial_balance: f64,
    ) -> DomainResult<&Warehouse> {
        let id = self.allocate_id()?;
        let storage = BoundedAccumulator::new(capacity, initial_balance);
        tracing::debug!(warehouse_id = %id, name = %name, %storage, "warehouse registered");

        let warehouse = Warehouse::new(id, name, storage, Utc::now());
        Ok(&*self.warehouses.entry(id).or_insert(warehouse))
    }

    pub fn rename(&mut self, id: WarehouseId, name: WarehouseName) -> DomainResult<&Warehouse> {
        let warehouse = self.get_mut(id)?;
        tracing::debug!(warehouse_id = %id, from = %warehouse.name(), to = %name, "warehouse renamed");
        warehouse.rename(name, Utc::now());
        Ok(&*warehouse)
    }

    /// Add `amount` to a warehouse, reporting how much actually fit.
    pub fn add(&mut self, id: WarehouseId, amount: f64) -> DomainResult<Addition> {
        let warehouse = self.get_mut(id)?;
        let added = warehouse.storage_mut(Utc::now()).increase_reporting(amount);
        tracing::debug!(warehouse_id = %id, requested = amount, added, "stock added");
        Ok(Addition {
            requested: amount,
            added,
        })
    }

    /// Take up to `amount` out of a warehouse; returns the amount removed.
    pub fn remove(&mut self, id: WarehouseId, amount: f64) -> DomainResult<f64> {
        let warehouse = self.get_mut(id)?;
        let removed = warehouse.storage_mut(Utc::now()).decrease(amount);
        tracing::debug!(warehouse_id = %id, requested = amount, removed, "stock removed");
        Ok(removed)
    }

    pub fn delete(&mut self, id: WarehouseId) -> DomainResult<Warehouse> {
        let warehouse = self.warehouses.remove(&id).ok_or_else(DomainError::not_found)?;
        tracing::debug!(warehouse_id = %id, "warehouse deleted");
        Ok(warehouse)
    }

    /// Drop every warehouse and restart id allocation at 1.
    pub fn reset(&mut self) {
        self.warehouses.clear();
        self.next_id = Some(WarehouseId::FIRST);
    }

    fn get_mut(&mut self, id: WarehouseId) -> DomainResult<&mut Warehouse> {
        self.warehouses.get_mut(&id).ok_or_else(DomainError::not_found)
    }

    fn allocate_id(&mut self) -> DomainResult<WarehouseId> {
        let id = self
            .next_id
            .ok_or_else(|| DomainError::invalid_id("warehouse id space exhausted"))?;
        self.next_id = id.next();
        Ok(id)
    }
}
