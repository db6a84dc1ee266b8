use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{RegisterRequest, SessionResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use dx_core::repositories::UserRepository;
use dx_core::services::auth::RegisterCommand;

use super::cookie::session_cookie;

/// Handler for POST /api/auth/register
///
/// Creates the account and signs the new user in.
///
/// ## Errors
/// - 400 Bad Request: Missing field, or email already registered
/// - 403 Forbidden: Registration disabled
pub async fn register<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let request = request.into_inner();
    let command = RegisterCommand {
        email: request.email,
        password: request.password,
        name: request.name,
    };

    match state.auth_service.register(command).await {
        Ok(outcome) => HttpResponse::Ok()
            .cookie(session_cookie(
                &state.session,
                outcome.token,
                state.token_service.token_lifetime_seconds(),
            ))
            .json(SessionResponse {
                success: true,
                user: outcome.user,
            }),
        Err(error) => handle_domain_error(error),
    }
}
