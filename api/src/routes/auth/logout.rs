use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::auth::MessageResponse;

use dx_core::repositories::UserRepository;

use super::cookie::removal_cookie;

/// Handler for POST /api/auth/logout
///
/// Sessions are stateless, so logging out only clears the cookie.
pub async fn logout<U>(state: web::Data<AppState<U>>) -> HttpResponse
where
    U: UserRepository + 'static,
{
    HttpResponse::Ok()
        .cookie(removal_cookie(&state.session))
        .json(MessageResponse {
            message: "Logged out successfully".to_string(),
        })
}
