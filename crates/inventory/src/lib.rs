//! Warehouse storage domain.
//!
//! [`BoundedAccumulator`] is the capacity-bounded quantity store every
//! warehouse is built on; [`WarehouseRegistry`] keeps named warehouses under
//! monotonically allocated ids. Pure domain logic (no IO, no HTTP).

pub mod accumulator;
pub mod registry;
pub mod warehouse;

pub use accumulator::BoundedAccumulator;
pub use registry::{Addition, WarehouseRegistry};
pub use warehouse::{Warehouse, WarehouseName};
