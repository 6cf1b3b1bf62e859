//! Request/response logging with redaction of sensitive body fields.
//!
//! Every exchange produces one INFO event carrying method, path, status and
//! duration as fields, plus an `exchange` field holding the full
//! `ExchangeRecord` (headers and both bodies) as one JSON object. Bodies are
//! buffered so the handler and the client still see the exact original bytes.

use std::time::Instant;

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use http::{HeaderMap, response::Parts};
use http_body_util::LengthLimitError;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::middleware::request_id::request_id_of;
use crate::state::AppState;

/// Top-level JSON keys whose values never reach the logs.
pub const SENSITIVE_FIELDS: &[&str] = &["password", "token", "secret", "id_token"];

/// Replacement written in place of a sensitive value.
pub const REDACTED: &str = "******";

/// Mask sensitive top-level fields of a JSON object.
///
/// Anything that is not an object logs as `null`.
pub fn redact(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            for field in SENSITIVE_FIELDS {
                if let Some(v) = map.get_mut(*field) {
                    *v = Value::String(REDACTED.to_string());
                }
            }
            Value::Object(map)
        }
        _ => Value::Null,
    }
}

/// Parse a buffered body for logging. Empty or non-JSON bodies become `null`.
fn loggable_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).map(redact).unwrap_or(Value::Null)
}

/// Render headers as `{ name: [values...] }`.
fn headers_json(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for name in headers.keys() {
        let values = headers
            .get_all(name)
            .iter()
            .map(|v| Value::String(String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();
        map.insert(name.as_str().to_string(), Value::Array(values));
    }
    Value::Object(map)
}

/// Whether a buffering failure came from the size cap rather than the transport.
fn is_length_limit(err: axum::Error) -> bool {
    err.into_inner().downcast_ref::<LengthLimitError>().is_some()
}

/// One logged request/response pair.
///
/// Serialized once so bodies and headers stay nested JSON for log consumers.
#[derive(Debug, Serialize)]
pub struct ExchangeRecord {
    pub time: String,
    pub method: String,
    pub path: String,
    pub request_id: String,
    pub request_headers: Value,
    pub response_headers: Value,
    pub request_body: Value,
    pub response_body: Value,
    pub status: u16,
    pub duration_ms: u64,
}

/// Collect a response body, replacing the response with a 500 if that fails.
async fn buffer_response(response: Response) -> (Parts, Bytes) {
    let (parts, body) = response.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (parts, bytes),
        Err(e) => {
            let (parts, body) =
                ApiError::Internal(format!("failed to buffer response body: {}", e))
                    .into_response()
                    .into_parts();
            // Error bodies are a single in-memory chunk.
            (parts, to_bytes(body, usize::MAX).await.unwrap_or_default())
        }
    }
}

/// Middleware that logs each request and response with redacted bodies.
///
/// Request bodies larger than `max_body_bytes` are refused with 413; that
/// exchange is still logged, with a `null` request body.
pub async fn log_exchange(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started_at = Utc::now();
    let start = Instant::now();
    let limit = state.config().max_body_bytes;

    let (parts, body) = request.into_parts();
    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();
    let request_id = request_id_of(&parts.headers).unwrap_or_default().to_string();
    let request_headers = headers_json(&parts.headers);

    let (request_body, response) = match to_bytes(body, limit).await {
        Ok(bytes) => {
            let logged = loggable_body(&bytes);
            let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;
            (logged, response)
        }
        Err(e) => {
            let error = if is_length_limit(e) {
                tracing::warn!(%method, %path, limit, "Request body too large");
                ApiError::PayloadTooLarge(format!("request body exceeds {} bytes", limit))
            } else {
                ApiError::BadRequest("Failed to read request body".to_string())
            };
            (Value::Null, error.into_response())
        }
    };

    let (parts, response_bytes) = buffer_response(response).await;

    let record = ExchangeRecord {
        time: started_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        method,
        path,
        request_id,
        request_headers,
        response_headers: headers_json(&parts.headers),
        request_body,
        response_body: loggable_body(&response_bytes),
        status: parts.status.as_u16(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    let exchange = serde_json::to_string(&record).unwrap_or_default();

    tracing::info!(
        method = %record.method,
        path = %record.path,
        status = record.status,
        duration_ms = record.duration_ms,
        request_id = %record.request_id,
        exchange = %exchange,
        "Request handled"
    );

    Response::from_parts(parts, Body::from(response_bytes))
}
