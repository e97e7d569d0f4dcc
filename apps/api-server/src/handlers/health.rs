//! Health check endpoint.

use actix_web::{HttpResponse, web};
use blog_shared::dto::HealthResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        posts: state.posts.count().await?,
    };

    Ok(HttpResponse::Ok().json(response))
}
