//! Application state and factory
//!
//! This module wires the core services into shared state and builds the
//! Actix-web application with its middleware and routes.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::middleware::SessionGate;
use crate::routes::{admin, analytics, auth, health_check, session};

use dx_core::repositories::UserRepository;
use dx_core::services::auth::{AuthService, AuthServiceConfig};
use dx_core::services::token::{TokenService, TokenServiceConfig};
use dx_shared::config::{AppConfig, Environment, SessionConfig};
use dx_shared::errors::{error_codes, ErrorResponse};

/// Application state shared by all handlers
pub struct AppState<U>
where
    U: UserRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub token_service: Arc<TokenService>,
    pub session: SessionConfig,
    pub environment: Environment,
}

impl<U> AppState<U>
where
    U: UserRepository,
{
    /// Build the services on top of `user_repository`
    ///
    /// The signing secret is taken from `config` once, here.
    pub fn new(user_repository: Arc<U>, config: &AppConfig) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
            &config.auth.jwt,
        )));
        let auth_service = Arc::new(AuthService::new(
            user_repository,
            Arc::clone(&token_service),
            AuthServiceConfig::default(),
        ));

        Self {
            auth_service,
            token_service,
            session: config.auth.session.clone(),
            environment: config.environment,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let session_gate = SessionGate::new(
        Arc::clone(&app_state.token_service),
        app_state.session.cookie_name.clone(),
    );

    App::new()
        .app_data(app_state)
        // Last wrap runs first: request logging, then the session gate
        .wrap(session_gate)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/dashboard", web::get().to(session::dashboard))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U>))
                        .route("/login", web::post().to(auth::login::<U>))
                        .route("/logout", web::post().to(auth::logout::<U>))
                        .route("/me", web::get().to(auth::me::<U>)),
                )
                .service(
                    web::scope("/admin").route("/users", web::get().to(admin::list_users::<U>)),
                )
                .service(
                    web::scope("/analytics")
                        .route("", web::post().to(analytics::process))
                        .route("/window", web::get().to(analytics::window)),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
