use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Read-only source of posts.
///
/// Implementations own the collection for the lifetime of the service and
/// hand out shared snapshots; nothing in the domain layer mutates them.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, in seed order.
    async fn all(&self) -> Result<Arc<[Post]>, RepoError>;

    /// Number of posts in the collection.
    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.all().await?.len())
    }
}
