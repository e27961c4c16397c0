use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mta_core::error::CoreError;

use crate::response::OptimizerResponse;

/// Application-level error type for HTTP handlers.
///
/// Rendered as the optimizer's error envelope. The HTTP status stays 200;
/// clients distinguish failures by `status == "Error"`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mta_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Core(core) if core.is_configuration() => {
                tracing::warn!(error = %core, "Threshold configuration error");
                core.to_string()
            }
            AppError::Core(core) => {
                tracing::error!(error = %core, "Core error while handling request");
                core.to_string()
            }
        };

        (StatusCode::OK, Json(OptimizerResponse::error(message))).into_response()
    }
}
