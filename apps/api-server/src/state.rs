//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use blog_core::PostService;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub started_at: Instant,
}

impl AppState {
    /// Load the post collection and build the application state.
    ///
    /// The collection comes from `POSTS_FILE` when configured, otherwise
    /// from the seed embedded in the binary.
    pub async fn new(config: &AppConfig) -> Result<Self, RepoError> {
        let repo = match &config.posts_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading posts from file");
                InMemoryPostRepository::from_file(path).await?
            }
            None => InMemoryPostRepository::seeded()?,
        };

        tracing::info!(posts = repo.len(), "Application state initialized");

        Ok(Self::with_repository(Arc::new(repo)))
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
            started_at: Instant::now(),
        }
    }
}
