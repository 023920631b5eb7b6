use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockpilot_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match &err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg.clone())
        }
        DomainError::Parse { .. } => {
            json_error(StatusCode::BAD_REQUEST, "parse_error", err.to_string())
        }
        DomainError::InvalidId(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", msg.clone())
        }
        DomainError::NotFound { .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        DomainError::InvariantViolation(msg) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invariant_violation",
            msg.clone(),
        ),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg.clone()),
        DomainError::Upstream { .. } => json_error(
            StatusCode::BAD_GATEWAY,
            "upstream_unavailable",
            err.to_string(),
        ),
    }
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
