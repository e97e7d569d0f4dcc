//! Post listing and lookup handlers.

use actix_web::{HttpResponse, web};
use blog_core::PostQuery;
use blog_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts?page=&limit=&category=&keyword=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let page = state.posts.list(&query).await?;

    tracing::debug!(
        total_posts = page.total_posts,
        current_page = page.current_page,
        returned = page.posts.len(),
        "Listed posts"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&id, chrono::Utc::now()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.posts.categories().await?;
    let message = format!("{} categories", categories.len());
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(categories, message)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::Value;

    use crate::handlers::configure_routes;
    use crate::testing::{broken_state, fixture_state};

    async fn get(state: crate::state::AppState, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn test_list_defaults() {
        let (status, body) = get(fixture_state(), "/api/posts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["totalPosts"], 10);
        assert_eq!(body["data"]["totalPages"], 2);
        assert_eq!(body["data"]["limit"], 6);
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 6);
        assert_eq!(body["data"]["nextPage"], 2);
        assert!(body["data"].get("previousPage").is_none());
    }

    #[actix_web::test]
    async fn test_list_by_category_ignores_case() {
        let (status, body) = get(fixture_state(), "/api/posts?category=TECH").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalPosts"], 3);
        for post in body["data"]["posts"].as_array().unwrap() {
            assert_eq!(post["category"].as_str().unwrap().to_lowercase(), "tech");
        }
    }

    #[actix_web::test]
    async fn test_list_decodes_encoded_keyword() {
        let (status, body) = get(fixture_state(), "/api/posts?keyword=%20Recipe%20").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalPosts"], 2);
    }

    #[actix_web::test]
    async fn test_list_page_past_the_end() {
        let (status, body) = get(fixture_state(), "/api/posts?page=40&limit=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["currentPage"], 40);
        assert_eq!(body["data"]["posts"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_list_rejects_zero_limit() {
        let (status, body) = get(fixture_state(), "/api/posts?limit=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Invalid Pagination Parameters");
        assert_eq!(body["details"], serde_json::json!(["limit must be a positive number"]));
    }

    #[actix_web::test]
    async fn test_list_rejects_oversized_pagination() {
        let (status, body) = get(fixture_state(), "/api/posts?page=2000000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Value Too Large");
    }

    #[actix_web::test]
    async fn test_list_rejects_short_keyword() {
        let (status, body) = get(fixture_state(), "/api/posts?keyword=a").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "keyword must be at least 2 characters long");
    }

    #[actix_web::test]
    async fn test_list_rejects_repeated_parameters() {
        let (status, body) = get(fixture_state(), "/api/posts?page=1&page=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Bad Request");
    }

    #[actix_web::test]
    async fn test_get_existing_post() {
        let (status, body) = get(fixture_state(), "/api/posts/3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["title"], "Lisbon in spring");
        assert!(body["data"]["requestedAt"].is_string());
    }

    #[actix_web::test]
    async fn test_get_missing_post() {
        let (status, body) = get(fixture_state(), "/api/posts/99999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["requested_id"], 99999);
    }

    #[actix_web::test]
    async fn test_get_invalid_ids() {
        let (status, body) = get(fixture_state(), "/api/posts/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Invalid Post ID");

        let (status, body) = get(fixture_state(), "/api/posts/5000000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["title"], "Value Too Large");
    }

    #[actix_web::test]
    async fn test_categories() {
        let (status, body) = get(fixture_state(), "/api/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["category"], "Tech");
        assert_eq!(body["data"][0]["count"], 3);
        assert_eq!(body["message"], "4 categories");
    }

    #[actix_web::test]
    async fn test_repository_failure_is_500() {
        let (status, body) = get(broken_state(), "/api/posts").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("detail").is_none());
    }
}
