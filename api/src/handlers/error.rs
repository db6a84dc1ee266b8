//! Conversion of domain errors into HTTP responses.
//!
//! Session token failures are deliberately indistinguishable to clients:
//! malformed, forged and expired tokens all produce the same 401 body.

use actix_web::{http::StatusCode, HttpResponse};
use dx_core::errors::{AuthError, DomainError, ValidationError};
use dx_shared::errors::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Generic 401 body shared by every session failure
pub fn unauthorized() -> HttpResponse {
    error_response(
        StatusCode::UNAUTHORIZED,
        error_codes::UNAUTHORIZED,
        "Unauthorized",
    )
}

/// 400 response for a request body that failed validation
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort_unstable();
    tracing::debug!(?fields, "request validation failed");

    error_response(
        StatusCode::BAD_REQUEST,
        error_codes::VALIDATION_ERROR,
        format!("Required fields missing or invalid: {}", fields.join(", ")),
    )
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Token(reason) => {
            tracing::warn!(%reason, "session token rejected");
            unauthorized()
        }
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::Unauthorized => unauthorized(),
            AuthError::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_CREDENTIALS,
                "Invalid credentials",
            ),
            AuthError::UserAlreadyExists => error_response(
                StatusCode::BAD_REQUEST,
                error_codes::USER_ALREADY_EXISTS,
                "Email is already registered",
            ),
            AuthError::UserNotFound => error_response(
                StatusCode::NOT_FOUND,
                error_codes::NOT_FOUND,
                "User not found",
            ),
            AuthError::RegistrationDisabled => error_response(
                StatusCode::FORBIDDEN,
                error_codes::FORBIDDEN,
                "Registration is disabled",
            ),
        },
        DomainError::Validation(ValidationError::RequiredField { field }) => error_response(
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            format!("Field required: {}", field),
        ),
        DomainError::NotFound { resource } => error_response(
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        ),
        DomainError::Internal { message } => {
            tracing::error!(%message, "internal error");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "Internal server error",
            )
        }
    }
}

fn error_response(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}
