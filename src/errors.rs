use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::pod::error::PodQueryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidSortKey(String),

    #[error("{0}")]
    K8sApiError(String),
}

impl From<PodQueryError> for AppError {
    fn from(err: PodQueryError) -> Self {
        let message = err.to_string();
        match err {
            PodQueryError::InvalidSortKey(_) => AppError::InvalidSortKey(message),
            PodQueryError::SourceUnavailable(_) => AppError::K8sApiError(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Query failures are all reported as server errors with the message as plain text
        let status = match self {
            AppError::InvalidSortKey(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::K8sApiError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
