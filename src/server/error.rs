//! Handler errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::content::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] anyhow::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            // Duplicate ids are rejected when the store is built, never by a handler
            AppError::Store(StoreError::DuplicateId(_)) | AppError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        (status, self.to_string()).into_response()
    }
}
