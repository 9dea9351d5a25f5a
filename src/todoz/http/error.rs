use crate::error::TodozError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

pub const LIST_NOT_FOUND: &str = "List not found";
pub const TODO_NOT_FOUND: &str = "Todo not found";
pub const ROUTE_NOT_FOUND: &str = "Not found";
pub const INTERNAL_ERROR: &str = "Something went wrong!";

/// The `{ "error": ... }` envelope every failure is reported with.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A failure on its way out to the client.
#[derive(Debug)]
pub enum ApiError {
    /// The request reached the store layer and failed there.
    Domain(TodozError),
    /// No route matched the method and path.
    RouteNotFound,
    /// The request body could not be read as JSON at all.
    MalformedBody(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<TodozError> for ApiError {
    fn from(value: TodozError) -> Self {
        Self::Domain(value)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(TodozError::ListNotFound(_) | TodozError::TodoNotFound(_))
            | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Domain(TodozError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(_) | Self::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Faults never leak their details.
    pub fn message(&self) -> String {
        match self {
            Self::Domain(TodozError::ListNotFound(_)) => LIST_NOT_FOUND.to_string(),
            Self::Domain(TodozError::TodoNotFound(_)) => TODO_NOT_FOUND.to_string(),
            Self::Domain(TodozError::InvalidInput(msg)) => msg.clone(),
            Self::RouteNotFound => ROUTE_NOT_FOUND.to_string(),
            Self::Domain(_) | Self::MalformedBody(_) => INTERNAL_ERROR.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Domain(err) if status.is_server_error() => {
                error!(error = %err, "request failed");
            }
            Self::MalformedBody(detail) => {
                error!(error = %detail, "malformed request body");
            }
            other => {
                debug!(status = status.as_u16(), error = ?other, "request rejected");
            }
        }
        let body = ErrorBody {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
