//! Error responses.
//!
//! Every failure leaving a handler becomes an [`ApiError`] and is rendered
//! as `{"result": "<message>"}` with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("wrong path")]
    UnknownRoute,

    /// The path exists but not for this method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// A catalog query failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Catalog(e) => {
                tracing::error!(error = %e, "Catalog query failed");
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(serde_json::json!({ "result": message }))).into_response()
    }
}
