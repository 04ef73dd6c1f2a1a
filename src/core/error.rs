use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::features::locations::store::StoreError;
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// A read against the store failed. `resource` is the plural table name.
    #[error("Could not fetch {resource}: {source}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn fetch(resource: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Fetch { resource, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Storage failures are reported as 400 to stay wire-compatible with
        // existing clients.
        let (status, message, error) = match self {
            AppError::Fetch { resource, source } => {
                tracing::warn!("Could not fetch {}: {}", resource, source);
                (
                    StatusCode::BAD_REQUEST,
                    format!("Could not fetch {}", resource),
                    source.to_string(),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid request".to_string(),
                msg,
            ),
        };

        ApiResponse::<()>::failure(status, message, error).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
