//! Failure paths of the contact form handler and their JSON rendering.
//!
//! Diagnostic detail is written to the log only; clients get a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{config::ConfigError, mail::MailError, models::ApiResponse};

pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "Server configuration error. Please contact the administrator.";
pub const DELIVERY_ERROR_MESSAGE: &str = "Failed to send email. Please try again later.";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Server configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("Email sending failed: {0}")]
    Delivery(#[from] MailError),
}

pub type ContactResult<T> = Result<T, ContactError>;

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ContactError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ApiResponse::failure("Method not allowed"),
            ),
            ContactError::Configuration(err) => {
                tracing::error!(error = %err, "Rejecting submission, delivery is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(CONFIGURATION_ERROR_MESSAGE),
                )
            }
            ContactError::Validation(errors) => {
                tracing::info!(count = errors.len(), "Submission failed validation");
                (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::failure("Validation failed").with_errors(errors),
                )
            }
            ContactError::Delivery(err) => {
                tracing::error!(error = %err, "Email sending failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(DELIVERY_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
