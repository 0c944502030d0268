use crate::domain::contact::ports::ContactServiceError;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Client-visible error bodies. Fixed strings only: whatever the provider
/// reported stays in the server-side logs.
const MISSING_FIELDS: &str = "All fields are required";
const DELIVERY_FAILED: &str = "Failed to send message. Please try again later.";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Delivery error: {0}")]
    DeliveryError(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<ContactServiceError> for AppError {
    fn from(error: ContactServiceError) -> Self {
        match error {
            ContactServiceError::ValidationError(e) => AppError::ValidationError(e.to_string()),
            ContactServiceError::DeliveryError { .. } => AppError::DeliveryError(error.to_string()),
            ContactServiceError::Unexpected(e) => AppError::Unexpected(e),
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationError(_) => HttpResponse::BadRequest().json(ErrorBody {
                error: MISSING_FIELDS,
            }),
            AppError::DeliveryError(_) | AppError::Unexpected(_) => {
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: DELIVERY_FAILED,
                })
            }
        }
    }
}
