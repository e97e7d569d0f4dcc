//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

#[cfg(test)]
mod testing;

use config::AppConfig;
use middleware::rate_limit::RateLimitMiddleware;
use middleware::security;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

/// Failures that prevent the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to load posts: {0}")]
    Posts(#[from] blog_core::RepoError),

    #[error("failed to build rate limiter: {0}")]
    RateLimit(#[from] blog_core::ports::RateLimitError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env();

    // Initialize tracing
    telemetry::init_telemetry(&TelemetryConfig::from_env(config.environment));

    // Build application state
    let state = AppState::new(&config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load post collection");
    })?;

    let rate_limit = build_rate_limit(&config)?;

    tracing::info!(
        environment = ?config.environment,
        origins = ?config.cors_allowed_origins,
        "Starting blog API server on {}:{}",
        config.host,
        config.port
    );

    let origins = config.cors_allowed_origins.clone();
    let max_body_size = config.max_body_size;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(rate_limit.clone())
            .wrap(security::security_headers())
            .wrap(security::cors(&origins))
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            // limit size of the payload (global configuration)
            .app_data(web::PayloadConfig::new(max_body_size))
            .app_data(web::JsonConfig::default().limit(max_body_size))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the per-client rate limiter and start its cleanup task.
#[cfg(feature = "rate-limit")]
fn build_rate_limit(config: &AppConfig) -> Result<RateLimitMiddleware, StartupError> {
    use blog_infra::InMemoryRateLimiter;
    use std::sync::Arc;
    use std::time::Duration;

    let limiter = Arc::new(InMemoryRateLimiter::new(config.rate_limit.clone())?);
    tracing::info!(
        max_requests = limiter.config().max_requests,
        window_secs = limiter.config().window.as_secs(),
        "Rate limiting enabled"
    );

    let cleanup = Arc::clone(&limiter);
    actix_rt::spawn(async move {
        let mut interval = actix_rt::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            cleanup.retain_recent();
            tracing::trace!(clients = cleanup.tracked_clients(), "Pruned rate limiter state");
        }
    });

    Ok(RateLimitMiddleware::new(limiter, config.trust_proxy))
}

#[cfg(not(feature = "rate-limit"))]
fn build_rate_limit(_config: &AppConfig) -> Result<RateLimitMiddleware, StartupError> {
    tracing::info!("Running without rate-limit feature - requests are not throttled");
    Ok(RateLimitMiddleware::disabled())
}
