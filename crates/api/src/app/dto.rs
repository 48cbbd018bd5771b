use serde::Deserialize;
use thiserror::Error;

use depot_inventory::Warehouse;

// -------------------------
// Request DTOs
// -------------------------

/// A numeric operand as sent by a client: either a JSON number or text.
///
/// Text comes straight from form fields and is untrusted; it is parsed by
/// [`parse_quantity`] before anything reaches the storage layer. Any other
/// JSON shape (bool, array, object) lands in `Other` so it can be rejected
/// with the operand's own error instead of a body-level rejection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
pub struct CreateWarehouseRequest {
    pub name: Option<String>,
    pub capacity: Option<QuantityInput>,
    pub initial_balance: Option<QuantityInput>,
}

#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: Option<QuantityInput>,
}

#[derive(Debug, Deserialize)]
pub struct RenameWarehouseRequest {
    pub name: Option<String>,
}

// -------------------------
// Operand parsing
// -------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("not a finite number: {0:?}")]
pub struct InvalidQuantity(pub String);

/// Turn a client operand into a finite `f64`.
///
/// A missing operand counts as `0`. Text is trimmed before parsing; NaN and
/// infinities are rejected.
pub fn parse_quantity(input: Option<&QuantityInput>) -> Result<f64, InvalidQuantity> {
    let value = match input {
        None => return Ok(0.0),
        Some(QuantityInput::Number(n)) => *n,
        Some(QuantityInput::Text(raw)) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidQuantity(raw.clone()))?,
        Some(QuantityInput::Other(value)) => return Err(InvalidQuantity(value.to_string())),
    };

    if !value.is_finite() {
        return Err(InvalidQuantity(value.to_string()));
    }
    Ok(value)
}

// -------------------------
// Response mapping
// -------------------------

pub fn warehouse_to_json(warehouse: &Warehouse) -> serde_json::Value {
    let storage = warehouse.storage();
    serde_json::json!({
        "id": warehouse.id_typed(),
        "name": warehouse.name().as_str(),
        "capacity": storage.capacity(),
        "balance": storage.balance(),
        "remaining_capacity": storage.remaining_capacity(),
        "description": storage.describe(),
        "created_at": warehouse.created_at(),
        "updated_at": warehouse.updated_at(),
    })
}
