//! Error mapping helpers for the HTTP feedback gateway.

use reqwest::StatusCode;
use serde_json::Value;

use crate::api::error::ApiError;

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ApiError {
    if error.is_decode() {
        return ApiError::Decode {
            message: format!("{operation}: {error}"),
        };
    }

    ApiError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    ApiError::Request {
        status: status.as_u16(),
        detail: extract_detail(body),
    }
}

/// Extracts the human-readable `detail` from an error body.
///
/// The backend reports either `{"detail": "..."}` or, for request validation
/// failures, `{"detail": [{"msg": "..."}, ...]}`. Validation messages are
/// joined with `"; "`.
pub(super) fn extract_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return None;
    };

    match value.get("detail")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
