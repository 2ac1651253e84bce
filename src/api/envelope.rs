//! Uniform response envelope returned by every todo route.

use super::TodoRoute;
use crate::todo::services::TodoServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};

/// Response envelope carrying either a result or error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    /// Whether the operation succeeded.
    pub succeeded: bool,
    /// Result payload on success.
    pub result: Option<T>,
    /// HTTP status of the response, serialized as its numeric code.
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    /// Error messages on failure.
    pub errors: Vec<String>,
}

impl<T> ApiResult<T> {
    /// Builds a successful envelope with an explicit status.
    #[must_use]
    pub const fn success(result: T, status_code: StatusCode) -> Self {
        Self {
            succeeded: true,
            result: Some(result),
            status_code,
            errors: Vec::new(),
        }
    }

    /// Builds a failed envelope.
    #[must_use]
    pub const fn failure(status_code: StatusCode, errors: Vec<String>) -> Self {
        Self {
            succeeded: false,
            result: None,
            status_code,
            errors,
        }
    }

    /// Builds an envelope from a workflow outcome for `route`.
    ///
    /// Success uses the route's success status; failures are mapped through
    /// [`status_for_error`].
    #[must_use]
    pub fn from_outcome(route: TodoRoute, outcome: Result<T, TodoServiceError>) -> Self {
        match outcome {
            Ok(result) => Self::success(result, route.success_status()),
            Err(err) => Self::from(&err),
        }
    }
}

impl<T> From<&TodoServiceError> for ApiResult<T> {
    fn from(err: &TodoServiceError) -> Self {
        Self::failure(status_for_error(err), vec![err.to_string()])
    }
}

impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

/// Maps a workflow failure onto its response status.
#[must_use]
pub const fn status_for_error(err: &TodoServiceError) -> StatusCode {
    match err {
        TodoServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        TodoServiceError::Repository(repository_err) if repository_err.is_not_found() => {
            StatusCode::NOT_FOUND
        }
        TodoServiceError::Domain(_) => StatusCode::BAD_REQUEST,
        TodoServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
