use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::UserListResponse;
use crate::handlers::error::handle_domain_error;

use dx_core::repositories::UserRepository;
use dx_shared::errors::{error_codes, ErrorResponse};

/// Handler for GET /api/admin/users
///
/// Debugging aid listing every account, newest first. Not available in
/// production.
pub async fn list_users<U>(state: web::Data<AppState<U>>) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if state.environment.is_production() {
        return HttpResponse::Forbidden().json(ErrorResponse::new(
            error_codes::FORBIDDEN,
            "Not available in production",
        ));
    }

    match state.auth_service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(UserListResponse { users }),
        Err(error) => handle_domain_error(error),
    }
}
