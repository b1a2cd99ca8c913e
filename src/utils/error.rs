use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::response::respond_json;

pub const USER_NOT_FOUND: &str = "The user with the specified ID does not exist";
pub const MISSING_FIELDS: &str = "Please provide first_name, last_name, and biography";
pub const MALFORMED_BODY: &str = "Invalid request body";
pub const INTERNAL_ERROR: &str = "unexpected internal server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    NotFound(String),
    InvalidRequest(String),
    /// Request body could not be decoded; carries the decoder message.
    MalformedBody(String),
    Internal(String),
    Config(String),
}

/// Error body sent to clients: `{"message": ..., "error": ...}`
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    /// Message exposed in the response body.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::InvalidRequest(msg) => msg.as_str(),
            AppError::MalformedBody(_) => MALFORMED_BODY,
            AppError::Internal(_) | AppError::Config(_) => INTERNAL_ERROR,
        }
    }

    pub fn to_body(&self) -> ErrorResponse {
        let error = match self {
            AppError::MalformedBody(detail) => Some(detail.clone()),
            _ => None,
        };

        ErrorResponse {
            message: self.message().to_string(),
            error,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::MalformedBody(msg) => write!(f, "Malformed body: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        respond_json(self.status_code(), &self.to_body())
    }
}
