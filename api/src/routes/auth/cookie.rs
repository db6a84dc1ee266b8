//! Session cookie construction shared by the auth routes

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use dx_shared::config::SessionConfig;

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

/// Cookie carrying a freshly issued session token
///
/// `max_age_seconds` is the token lifetime, so the cookie never outlives it.
pub fn session_cookie(
    config: &SessionConfig,
    token: String,
    max_age_seconds: i64,
) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .path(config.path.clone())
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(same_site(&config.same_site))
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Cookie that clears the session on the client
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(config, String::new(), 0);
    cookie.make_removal();
    cookie
}
