//! In-memory post repository holding the seed collection.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// Seed collection compiled into the binary.
const SEED_POSTS: &str = include_str!("../../data/posts.json");

/// Read-only repository backed by a shared slice.
///
/// The collection is validated once on construction and handed out as
/// cheap `Arc` clones afterwards; it is never reloaded.
#[derive(Clone)]
pub struct InMemoryPostRepository {
    posts: Arc<[Post]>,
}

impl InMemoryPostRepository {
    /// Wrap `posts`, rejecting collections with non-positive or duplicate ids.
    pub fn new(posts: Vec<Post>) -> Result<Self, RepoError> {
        validate(&posts)?;
        Ok(Self {
            posts: posts.into(),
        })
    }

    /// Parse a JSON array of posts.
    pub fn from_json(json: &str) -> Result<Self, RepoError> {
        let posts: Vec<Post> =
            serde_json::from_str(json).map_err(|e| RepoError::Malformed(e.to_string()))?;
        Self::new(posts)
    }

    /// The seed collection shipped with the service.
    pub fn seeded() -> Result<Self, RepoError> {
        Self::from_json(SEED_POSTS)
    }

    /// Load a JSON array of posts from `path`.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RepoError::Load(format!("{}: {}", path.display(), e)))?;
        let repo = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), posts = repo.posts.len(), "Loaded posts file");
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn validate(posts: &[Post]) -> Result<(), RepoError> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if post.id == 0 {
            return Err(RepoError::Malformed(format!(
                "post \"{}\" has id 0; ids must be positive",
                post.title
            )));
        }
        if !seen.insert(post.id) {
            return Err(RepoError::Malformed(format!("duplicate post id {}", post.id)));
        }
    }
    Ok(())
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn all(&self) -> Result<Arc<[Post]>, RepoError> {
        Ok(Arc::clone(&self.posts))
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.len())
    }
}
