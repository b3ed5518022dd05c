//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use matterhub_domain::error::MatterHubError;

/// JSON error body returned by API endpoints.
///
/// Controller failures carry `stderr`; rejected requests carry `error`.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stderr: Option<String>,
}

/// Maps request and controller failures to an HTTP response.
pub enum ApiError {
    /// The body was not valid JSON for the endpoint.
    Rejected(JsonRejection),
    /// The service refused or the controller failed.
    Domain(MatterHubError),
}

impl From<MatterHubError> for ApiError {
    fn from(err: MatterHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Rejected(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (StatusCode::BAD_REQUEST, bad_request(rejection.body_text()))
            }
            Self::Domain(MatterHubError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, bad_request(err.to_string()))
            }
            Self::Domain(MatterHubError::Command(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    status: "error",
                    error: None,
                    stderr: Some(err.stderr()),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

fn bad_request(message: String) -> ErrorBody {
    ErrorBody {
        status: "error",
        error: Some(message),
        stderr: None,
    }
}
