use chrono::{DateTime, Utc};

use depot_core::{DomainError, Entity, ValueObject, WarehouseId};

use crate::accumulator::BoundedAccumulator;

/// Display name of a warehouse: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WarehouseName(String);

impl ValueObject for WarehouseName {}

impl WarehouseName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("warehouse name is required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for WarehouseName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named storage unit held by the [`WarehouseRegistry`](crate::WarehouseRegistry).
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    id: WarehouseId,
    name: WarehouseName,
    storage: BoundedAccumulator,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Warehouse {
    pub(crate) fn new(
        id: WarehouseId,
        name: WarehouseName,
        storage: BoundedAccumulator,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            storage,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_typed(&self) -> WarehouseId {
        self.id
    }

    pub fn name(&self) -> &WarehouseName {
        &self.name
    }

    pub fn storage(&self) -> &BoundedAccumulator {
        &self.storage
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn storage_mut(&mut self, now: DateTime<Utc>) -> &mut BoundedAccumulator {
        self.updated_at = now;
        &mut self.storage
    }

    pub(crate) fn rename(&mut self, name: WarehouseName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = WarehouseName::parse("  Main depot \n").unwrap();
        assert_eq!(name.as_str(), "Main depot");
        assert_eq!(name.to_string(), "Main depot");
    }

    #[test]
    fn blank_name_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = WarehouseName::parse(raw).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for blank name"),
            }
        }
    }

    #[test]
    fn touching_storage_bumps_updated_at() {
        let created = Utc::now();
        let mut warehouse = Warehouse::new(
            WarehouseId::FIRST,
            WarehouseName::parse("A").unwrap(),
            BoundedAccumulator::new(10.0, 1.0),
            created,
        );

        let later = created + chrono::Duration::seconds(5);
        warehouse.storage_mut(later).increase(2.0);

        assert_eq!(warehouse.storage().balance(), 3.0);
        assert_eq!(warehouse.created_at(), created);
        assert_eq!(warehouse.updated_at(), later);
        assert_eq!(*warehouse.id(), WarehouseId::FIRST);
    }
}
