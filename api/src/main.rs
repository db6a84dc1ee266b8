use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use dx_api::{config, create_app, AppState};
use dx_core::repositories::InMemoryUserRepository;
use dx_shared::config::{LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        "starting Dexboard API server"
    );
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!(
            "JWT_SECRET is not set; session tokens are signed with an insecure development secret"
        );
    }

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let app_state = web::Data::new(AppState::new(user_repository, &config));

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(config.server.bind_address())
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?
        .run()
        .await
        .context("server terminated with an error")
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
