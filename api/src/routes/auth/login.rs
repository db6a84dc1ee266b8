use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, SessionResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use dx_core::repositories::UserRepository;
use dx_core::services::auth::LoginCommand;

use super::cookie::session_cookie;

/// Handler for POST /api/auth/login
///
/// Checks the credentials and opens a session. The token is only ever
/// returned in the `Set-Cookie` header.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "ana@example.com",
///     "password": "hunter2"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "user": { "id": "...", "email": "ana@example.com", "name": "Ana", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing email or password
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let request = request.into_inner();
    let command = LoginCommand {
        email: request.email,
        password: request.password,
    };

    match state.auth_service.login(command).await {
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
