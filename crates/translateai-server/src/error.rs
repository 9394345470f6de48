use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors the HTTP layer reports directly to the caller
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request body exceeded the configured limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The access gate could not check credentials
    #[error("{0}")]
    AccessUnavailable(String),
}

impl ServerError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::AccessUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) | Self::PayloadTooLarge(_) => "invalid_request_error",
            Self::AccessUnavailable(_) => "internal_error",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: &'static str,
    code: u16,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: ErrorDetails {
                message: self.to_string(),
                r#type: self.error_type(),
                code: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}
