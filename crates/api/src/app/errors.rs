use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use depot_core::DomainError;

use crate::app::services::ServiceError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => warehouse_not_found(),
    }
}

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    tracing::error!("service failure: {err}");
    match err {
        ServiceError::LockPoisoned => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

pub fn warehouse_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "Warehouse not found.")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
