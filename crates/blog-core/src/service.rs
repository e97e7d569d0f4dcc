//! Post service - joins the repository port with the pure query functions.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::categories;
use crate::domain::{CategorySummary, TimestampedPost};
use crate::error::QueryError;
use crate::lookup;
use crate::ports::PostRepository;
use crate::query::{self, PageResult, PostQuery};

/// Read-side entry point used by the HTTP boundary.
///
/// Each call takes one snapshot from the repository and runs the pure
/// pipeline over it. Repository failures surface as
/// [`QueryError::Internal`].
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// One page of posts matching `query`.
    pub async fn list(&self, query: &PostQuery) -> Result<PageResult, QueryError> {
        let posts = self.repo.all().await?;
        query::list_posts(&posts, query)
    }

    /// The post identified by `raw_id`, stamped with `requested_at`.
    pub async fn get(
        &self,
        raw_id: &str,
        requested_at: DateTime<Utc>,
    ) -> Result<TimestampedPost, QueryError> {
        let posts = self.repo.all().await?;
        lookup::find_post(&posts, raw_id, requested_at)
    }

    pub async fn categories(&self) -> Result<Vec<CategorySummary>, QueryError> {
        let posts = self.repo.all().await?;
        Ok(categories::summarize(&posts))
    }

    pub async fn count(&self) -> Result<usize, QueryError> {
        Ok(self.repo.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;
    use crate::error::RepoError;
    use crate::testing::fixture_posts;
    use async_trait::async_trait;

    struct FixtureRepository(Arc<[Post]>);

    #[async_trait]
    impl PostRepository for FixtureRepository {
        async fn all(&self) -> Result<Arc<[Post]>, RepoError> {
            Ok(Arc::clone(&self.0))
        }
    }

    struct BrokenRepository;

    #[async_trait]
    impl PostRepository for BrokenRepository {
        async fn all(&self) -> Result<Arc<[Post]>, RepoError> {
            Err(RepoError::Load("disk on fire".to_string()))
        }
    }

    fn service() -> (PostService, Arc<[Post]>) {
        let posts: Arc<[Post]> = fixture_posts().into();
        let service = PostService::new(Arc::new(FixtureRepository(Arc::clone(&posts))));
        (service, posts)
    }

    #[tokio::test]
    async fn test_list_uses_repository_snapshot() {
        let (service, _) = service();
        let page = service
            .list(&PostQuery::default().category("food"))
            .await
            .unwrap();
        assert_eq!(page.total_posts, 3);
    }

    #[tokio::test]
    async fn test_get_and_count() {
        let (service, posts) = service();
        let found = service.get("2", Utc::now()).await.unwrap();
        assert_eq!(found.post, posts[1]);
        assert_eq!(service.count().await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_repeated_calls_leave_snapshot_untouched() {
        let (service, posts) = service();
        let before: Vec<Post> = posts.to_vec();

        for page in ["1", "2", "3"] {
            service.list(&PostQuery::default().page(page).limit("4")).await.unwrap();
        }
        service.categories().await.unwrap();

        assert_eq!(posts.to_vec(), before);
    }

    #[tokio::test]
    async fn test_repository_failure_is_internal() {
        let service = PostService::new(Arc::new(BrokenRepository));

        let err = service.list(&PostQuery::default()).await.unwrap_err();
        assert!(matches!(err, QueryError::Internal(_)));
        assert!(!err.is_client_error());

        let err = service.get("1", Utc::now()).await.unwrap_err();
        assert!(matches!(err, QueryError::Internal(_)));
    }
}
