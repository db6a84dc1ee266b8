//! Session gate middleware for protecting dashboard pages.
//!
//! Requests outside the public set must carry a session cookie that passes
//! token verification. Anything else is redirected to the login page with
//! the original path in `from`, so the login page can send the user back.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::LOCATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use dx_core::{domain::entities::AuthenticatedUser, services::token::TokenService};
use futures_util::future::LocalBoxFuture;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

/// Paths served without a session
const PUBLIC_PATHS: &[&str] = &["/", "/login", "/register", "/health"];

/// Path prefixes served without a session (API routes check sessions themselves)
const PUBLIC_PREFIXES: &[&str] = &["/api/", "/_next/", "/static/"];

/// Static assets served without a session
const PUBLIC_ASSETS: &[&str] = &["/favicon.ico", "/logo.png"];

/// Login page the gate redirects to
const LOGIN_PATH: &str = "/login";

/// Escaped in the `from` value: everything but unreserved characters and `/`
const FROM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Whether `path` bypasses the session gate
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
        || PUBLIC_ASSETS.contains(&path)
        || path == "/api"
        || PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Verified session attached to the request by [`SessionGate`]
#[derive(Debug, Clone)]
pub struct SessionContext(pub AuthenticatedUser);

impl SessionContext {
    pub fn user(&self) -> &AuthenticatedUser {
        &self.0
    }

    pub fn into_inner(self) -> AuthenticatedUser {
        self.0
    }
}

/// Extractor for handlers mounted behind [`SessionGate`]
impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<SessionContext>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Unauthorized")),
        )
    }
}

/// Session gate middleware factory
pub struct SessionGate {
    token_service: Arc<TokenService>,
    cookie_name: String,
}

impl SessionGate {
    /// Creates a gate that verifies the cookie named `cookie_name`
    pub fn new(token_service: Arc<TokenService>, cookie_name: impl Into<String>) -> Self {
        Self {
            token_service,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            cookie_name: self.cookie_name.clone(),
        }))
    }
}

/// Session gate middleware service
pub struct SessionGateMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    cookie_name: String,
}

impl<S, B> Service<ServiceRequest> for SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public_path(req.path()) {
            let service = Rc::clone(&self.service);
            return Box::pin(async move {
                service.call(req).await.map(ServiceResponse::map_into_left_body)
            });
        }

        let session = req
            .cookie(&self.cookie_name)
            .ok_or("missing session cookie")
            .and_then(|cookie| {
                self.token_service
                    .verify(cookie.value())
                    .map_err(|_| "invalid session token")
            });

        match session {
            Ok(user) => {
                req.extensions_mut().insert(SessionContext(user));
                let service = Rc::clone(&self.service);
                Box::pin(async move {
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                })
            }
            Err(reason) => {
                tracing::debug!(path = %req.path(), reason, "redirecting to login");
                let location = login_redirect(req.path());
                let (request, _) = req.into_parts();
                let response = HttpResponse::Found()
                    .insert_header((LOCATION, location))
                    .finish()
                    .map_into_right_body();
                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
        }
    }
}

/// Login URL carrying the requested path
pub fn login_redirect(path: &str) -> String {
    format!("{}?from={}", LOGIN_PATH, utf8_percent_encode(path, FROM_VALUE))
}
