use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Uniform boundary for failed store calls: a sanitized problem body
/// instead of the raw driver error.
pub(crate) fn store_error(err: anyhow::Error) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "type": "about:blank",
            "title": "Error",
            "status": 500,
            "detail": err.to_string()
        })),
    )
        .into_response()
}
