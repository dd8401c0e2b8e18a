use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope carrying a payload.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            code: status.as_u16(),
            message: message.into(),
            data,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Success envelope without a payload (logout, health, clinic bookings).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub code: u16,
    pub message: String,
}

impl MessageDto {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Failure envelope; `errors` is only present for field-level validation failures.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorDto>>,
}

impl ErrorDto {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: status.as_u16(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldErrorDto>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// One failed field inside a validation failure envelope.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FieldErrorDto {
    pub code: u16,
    pub field: String,
    pub message: String,
}

impl FieldErrorDto {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST.as_u16(),
            field: field.into(),
            message: message.into(),
        }
    }
}
