//! Domain-level error types.

use thiserror::Error;

/// Query pipeline errors - every outcome of a read that is not a result.
///
/// Validation variants are deterministic functions of the input; only
/// `Internal` depends on the state of the repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid pagination parameters: {}", details.join(", "))]
    InvalidPagination { details: Vec<String> },

    #[error("pagination values too large")]
    PaginationTooLarge,

    #[error("keyword must be at least 2 characters long")]
    KeywordTooShort,

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("id too large: {0}")]
    IdTooLarge(String),

    #[error("post with id {requested_id} not found")]
    NotFound { requested_id: u64 },

    #[error("internal error: {0}")]
    Internal(String),
}

impl QueryError {
    /// True for errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, QueryError::Internal(_))
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Failed to load posts: {0}")]
    Load(String),

    #[error("Malformed post collection: {0}")]
    Malformed(String),
}

impl From<RepoError> for QueryError {
    fn from(err: RepoError) -> Self {
        QueryError::Internal(err.to_string())
    }
}
