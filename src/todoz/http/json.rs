use super::error::ApiError;
use crate::error::TodozError;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

pub const INVALID_BODY: &str = "Invalid request body";

/// JSON request body with the error semantics of the rest of the API.
///
/// - A body sent without a JSON content type, or with an empty body, is
///   read as `{}`.
/// - A body that cannot be buffered or is not valid JSON is a fault (500).
/// - Valid JSON of the wrong shape is a bad request (400).
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(&req) {
            return decode(Value::Object(Map::new()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return decode(Value::Object(Map::new()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<JsonBody<T>, ApiError> {
    serde_json::from_value(value).map(JsonBody).map_err(|e| {
        debug!(error = %e, "request body has the wrong shape");
        ApiError::from(TodozError::InvalidInput(INVALID_BODY.to_string()))
    })
}

fn has_json_content_type(req: &Request) -> bool {
    let Some(content_type) = req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
