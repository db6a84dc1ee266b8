use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::CurrentUserResponse;
use crate::handlers::error::{handle_domain_error, unauthorized};

use dx_core::repositories::UserRepository;

/// Handler for GET /api/auth/me
///
/// Resolves the user behind the session cookie.
///
/// ## Errors
/// - 401 Unauthorized: Missing cookie or a token that fails verification
/// - 404 Not Found: Token is valid but the user no longer exists
pub async fn me<U>(req: HttpRequest, state: web::Data<AppState<U>>) -> HttpResponse
where
    U: UserRepository + 'static,
{
    let Some(cookie) = req.cookie(&state.session.cookie_name) else {
        return unauthorized();
    };

    match state.auth_service.current_user(cookie.value()).await {
        Ok(user) => HttpResponse::Ok().json(CurrentUserResponse { user }),
        Err(error) => handle_domain_error(error),
    }
}
