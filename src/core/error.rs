use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

/// Application failure kinds. Every handler failure resolves to exactly one
/// of these; the wire shape is always `{success: false, error, message}` with
/// the canonical message for the kind. Variant payloads are log detail only
/// and never reach the wire.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn canonical_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            AppError::UnprocessableEntity(_) => "UNPROCESSABLE_ENTITY",
            AppError::Database(_) | AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            _ => {}
        }

        let status = self.status();
        let body = Json(ErrorResponse::new(
            status.as_u16(),
            self.canonical_message(),
        ));

        (status, body).into_response()
    }
}

/// Fallback for requests that match no route.
pub async fn not_found_fallback() -> AppError {
    AppError::NotFound("no route matched the request path".to_string())
}

/// Fallback for requests that match a route but not its method set.
pub async fn method_not_allowed_fallback() -> AppError {
    AppError::MethodNotAllowed("method not supported on this route".to_string())
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds() -> Vec<(AppError, u16, &'static str)> {
        vec![
            (AppError::BadRequest("x".to_string()), 400, "BAD_REQUEST"),
            (AppError::Unauthorized("x".to_string()), 401, "UNAUTHORIZED"),
            (AppError::Forbidden("x".to_string()), 403, "FORBIDDEN"),
            (AppError::NotFound("x".to_string()), 404, "NOT_FOUND"),
            (
                AppError::MethodNotAllowed("x".to_string()),
                405,
                "METHOD_NOT_ALLOWED",
            ),
            (
                AppError::UnprocessableEntity("x".to_string()),
                422,
                "UNPROCESSABLE_ENTITY",
            ),
            (
                AppError::Internal("x".to_string()),
                500,
                "INTERNAL_SERVER_ERROR",
            ),
            (
                AppError::Database(sqlx::Error::RowNotFound),
                500,
                "INTERNAL_SERVER_ERROR",
            ),
        ]
    }

    #[test]
    fn every_kind_maps_to_its_status_and_canonical_message() {
        for (error, code, message) in kinds() {
            assert_eq!(error.status().as_u16(), code, "{:?}", message);
            assert_eq!(error.canonical_message(), message);
        }
    }

    #[tokio::test]
    async fn response_body_carries_the_canonical_shape() {
        for (error, code, message) in kinds() {
            let response = error.into_response();
            assert_eq!(response.status().as_u16(), code);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(
                body,
                serde_json::json!({
                    "success": false,
                    "error": code,
                    "message": message,
                })
            );
        }
    }

    #[test]
    fn detail_strings_never_appear_in_the_canonical_message() {
        let error = AppError::NotFound("question 42 not found".to_string());
        assert_eq!(error.canonical_message(), "NOT_FOUND");
    }
}
