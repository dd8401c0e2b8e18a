use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::{ErrorDto, FieldErrorDto};

/// Request body failed field-level validation.
///
/// Carries one entry per failed field so the client can surface every problem
/// at once rather than one per round trip. Built by the input validators in
/// the service layer.
#[derive(Error, Debug)]
#[error("Validation failed for {} field(s)", errors.len())]
pub struct ValidationError {
    /// One entry per field that failed validation.
    pub errors: Vec<FieldErrorDto>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldErrorDto>) -> Self {
        Self { errors }
    }
}

/// Converts validation errors into a 400 Bad Request response.
///
/// The body is the standard failure envelope with "Validation failed" as the
/// message and the per-field entries under `errors`.
///
/// # Returns
/// A 400 Bad Request response listing every failed field
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorDto::new(StatusCode::BAD_REQUEST, "Validation failed".to_string())
                    .with_errors(self.errors),
            ),
        )
            .into_response()
    }
}
