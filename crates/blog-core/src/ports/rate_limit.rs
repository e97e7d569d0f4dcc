//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Per-client rate limiter - abstraction over rate limiting backends.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Record one request for `client_key` and report whether it may proceed.
    async fn check(&self, client_key: &str) -> Result<RateLimitResult, RateLimitError>;

    /// Maximum number of requests a client may make per window.
    fn limit(&self) -> u32;
}

/// Outcome of a rate limit check for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// How long the client has to wait before the next request is accepted.
    pub retry_after: Duration,
}

impl RateLimitResult {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            retry_after: Duration::ZERO,
        }
    }

    pub fn denied(retry_after: Duration) -> Self {
        Self {
            allowed: false,
            retry_after,
        }
    }
}

/// Rate limit errors.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid rate limit configuration: {0}")]
    InvalidConfig(String),
}
