use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::rsvp::RsvpError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // RSVP conflicts surface as plain bad requests on this API
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::InternalServerError(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
        }
    }
}

impl From<RsvpError> for AppError {
    fn from(err: RsvpError) -> Self {
        match err {
            RsvpError::InvalidAction => AppError::ValidationError(err.to_string()),
            RsvpError::AlreadyRsvped | RsvpError::CapacityExceeded | RsvpError::NotRsvped => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Log internal details
        self.log();

        // Only expose high-level message to the client
        let public_message = match &self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::InternalServerError(_) => "An internal error occurred".to_string(),
        };

        error_response(code, public_message, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let cases = [
            (
                AppError::ValidationError("bad input".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotFound("event".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("full".into()), StatusCode::BAD_REQUEST),
            (
                AppError::InternalServerError("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected);
        }
    }

    #[test]
    fn rsvp_errors_map_to_conflict_or_validation() {
        assert!(matches!(
            AppError::from(RsvpError::AlreadyRsvped),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(RsvpError::CapacityExceeded),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(RsvpError::NotRsvped),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(RsvpError::InvalidAction),
            AppError::ValidationError(_)
        ));
    }
}
