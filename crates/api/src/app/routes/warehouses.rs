use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use depot_core::WarehouseId;
use depot_inventory::WarehouseName;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/warehouses", get(list_warehouses).post(create_warehouse))
        .route("/warehouses/:id", get(get_warehouse).delete(delete_warehouse))
        .route("/warehouses/:id/add", post(add_to_warehouse))
        .route("/warehouses/:id/remove", post(remove_from_warehouse))
        .route("/warehouses/:id/rename", post(rename_warehouse))
}

fn parse_id(raw: &str) -> Result<WarehouseId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid warehouse id"))
}

fn invalid_operand(code: &'static str, message: &'static str, err: dto::InvalidQuantity) -> axum::response::Response {
    tracing::warn!(code, "rejected operand: {err}");
    errors::json_error(StatusCode::BAD_REQUEST, code, message)
}

fn rejected(message: &'static str) -> axum::response::Response {
    tracing::warn!("{message}");
    errors::json_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

pub async fn list_warehouses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let registry = match services.registry() {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let warehouses: Vec<serde_json::Value> = registry.list().map(dto::warehouse_to_json).collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": warehouses.len(),
            "warehouses": warehouses,
        })),
    )
        .into_response()
}

pub async fn create_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateWarehouseRequest>,
) -> axum::response::Response {
    let capacity = match dto::parse_quantity(body.capacity.as_ref()) {
        Ok(v) => v,
        Err(e) => return invalid_operand("invalid_capacity", "Invalid capacity value.", e),
    };

    let initial_balance = match dto::parse_quantity(body.initial_balance.as_ref()) {
        Ok(v) => v,
        Err(e) => {
            return invalid_operand("invalid_initial_balance", "Invalid initial balance value.", e);
        }
    };

    let name = match WarehouseName::parse(body.name.as_deref().unwrap_or_default()) {
        Ok(n) => n,
        Err(_) => return rejected("Warehouse name is required."),
    };

    if capacity <= 0.0 {
        return rejected("Capacity must be greater than 0.");
    }

    let mut registry = match services.registry_mut() {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let warehouse = match registry.create(name, capacity, initial_balance) {
        Ok(w) => w,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(warehouse_id = %warehouse.id_typed(), name = %warehouse.name(), "warehouse created");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!("Warehouse '{}' created successfully!", warehouse.name()),
            "warehouse": dto::warehouse_to_json(warehouse),
        })),
    )
        .into_response()
}

pub async fn get_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let registry = match services.registry() {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    match registry.get(id) {
        Some(w) => (StatusCode::OK, Json(dto::warehouse_to_json(w))).into_response(),
        None => errors::warehouse_not_found(),
    }
}

pub async fn add_to_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AmountRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut registry = match services.registry_mut() {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let remaining = match registry.get(id) {
        Some(w) => w.storage().remaining_capacity(),
        None => return errors::warehouse_not_found(),
    };

    let amount = match dto::parse_quantity(body.amount.as_ref()) {
        Ok(v) => v,
        Err(e) => return invalid_operand("invalid_amount", "Invalid amount value.", e),
    };

    if amount <= 0.0 {
        return rejected("Amount must be greater than 0.");
    }

    // "Full" is a request-level policy; the store itself would just clamp.
    if remaining <= 0.0 {
        tracing::warn!(warehouse_id = %id, "add rejected: warehouse full");
        return errors::json_error(
            StatusCode::CONFLICT,
            "warehouse_full",
            "Warehouse is full. Cannot add more content.",
        );
    }

    let addition = match registry.add(id, amount) {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(warehouse_id = %id, requested = addition.requested, added = addition.added, "stock added");

    let warehouse = registry.get(id).map(dto::warehouse_to_json);
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Added {} units to warehouse.", addition.requested),
            "requested": addition.requested,
            "added": addition.added,
            "warehouse": warehouse,
        })),
    )
        .into_response()
}

pub async fn remove_from_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AmountRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut registry = match services.registry_mut() {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    if registry.get(id).is_none() {
        return errors::warehouse_not_found();
    }

    let amount = match dto::parse_quantity(body.amount.as_ref()) {
        Ok(v) => v,
        Err(e) => return invalid_operand("invalid_amount", "Invalid amount value.", e),
    };

    if amount <= 0.0 {
        return rejected("Amount must be greater than 0.");
    }

    let removed = match registry.remove(id, amount) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(warehouse_id = %id, requested = amount, removed, "stock removed");

    let warehouse = registry.get(id).map(dto::warehouse_to_json);
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Removed {removed} units from warehouse."),
            "requested": amount,
            "removed": removed,
            "warehouse": warehouse,
        })),
    )
        .into_response()
}

pub async fn rename_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::RenameWarehouseRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut registry = match services.registry_mut() {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    if registry.get(id).is_none() {
        return errors::warehouse_not_found();
    }

    let name = match WarehouseName::parse(body.name.as_deref().unwrap_or_default()) {
        Ok(n) => n,
        Err(_) => return rejected("Warehouse name is required."),
    };

    let warehouse = match registry.rename(id, name) {
        Ok(w) => w,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(warehouse_id = %id, name = %warehouse.name(), "warehouse renamed");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Warehouse renamed to '{}'.", warehouse.name()),
            "warehouse": dto::warehouse_to_json(warehouse),
        })),
    )
        .into_response()
}

pub async fn delete_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut registry = match services.registry_mut() {
        Ok(r) => r,
        Err(e) => return errors::service_error_to_response(e),
    };

    let warehouse = match registry.delete(id) {
        Ok(w) => w,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(warehouse_id = %id, name = %warehouse.name(), "warehouse deleted");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("Warehouse '{}' deleted.", warehouse.name()),
            "id": id,
        })),
    )
        .into_response()
}
