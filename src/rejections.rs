use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// One failed field from payload validation.
#[derive(Debug, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Request-boundary error taxonomy. Everything a handler can fail with is
/// mapped here to an HTTP status plus a JSON body; storage and upstream
/// details are logged, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("validation failed")]
    Validation(Vec<FieldIssue>),
    #[error("{0}")]
    Input(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Upstream(&'static str),
    #[error("{0}")]
    Storage(&'static str),
}

impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        let issues = report
            .iter()
            .map(|(path, error)| FieldIssue {
                field: path.to_string(),
                message: error.to_string(),
            })
            .collect();
        Self::Validation(issues)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "You must be logged in." })),
            )
                .into_response(),
            Self::Validation(issues) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": issues }))).into_response()
            }
            Self::Input(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            Self::Upstream(_) | Self::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "An unexpected error occurred." })),
            )
                .into_response(),
        }
    }
}

/// Maps fallible lower-layer calls into `AppError`, logging the cause.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    fn reject_upstream(self, msg: &'static str) -> Result<T, AppError>;
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Storage(msg)
        })
    }

    fn reject_upstream(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Upstream(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}
