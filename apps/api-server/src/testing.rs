//! Application state fixtures for handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_core::testing::fixture_posts;
use blog_infra::InMemoryPostRepository;

use crate::state::AppState;

pub fn fixture_state() -> AppState {
    let repo = InMemoryPostRepository::new(fixture_posts()).expect("fixture posts are valid");
    AppState::with_repository(Arc::new(repo))
}

struct BrokenRepository;

#[async_trait]
impl PostRepository for BrokenRepository {
    async fn all(&self) -> Result<Arc<[Post]>, RepoError> {
        Err(RepoError::Load("storage unavailable".to_string()))
    }
}

pub fn broken_state() -> AppState {
    AppState::with_repository(Arc::new(BrokenRepository))
}
