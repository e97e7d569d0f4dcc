//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{HttpRequest, HttpResponse, web};
use blog_shared::ErrorResponse;

use crate::middleware::error::AppError;
use crate::observability::RequestId;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(query_config())
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/categories", web::get().to(posts::list_categories)),
    );
}

/// Query strings that don't deserialize (e.g. a repeated `page`) are
/// client errors, reported in the same format as every other 400.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Malformed query string: {}", err)).into()
    })
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest, request_id: RequestId) -> HttpResponse {
    let error = ErrorResponse::not_found(format!("No route for {} {}", req.method(), req.path()))
        .with_instance(req.path())
        .with_request_id(request_id.as_str());

    HttpResponse::NotFound().json(error)
}
