use actix_web::HttpResponse;
use serde_json::json;

use crate::middleware::SessionContext;

/// Handler for GET /dashboard
///
/// Sits behind the session gate and echoes the verified session.
pub async fn dashboard(session: SessionContext) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "session": session.into_inner() }))
}
