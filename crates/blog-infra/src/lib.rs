//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory repository only
//! - `rate-limit` - Per-client rate limiting via governor

pub mod repository;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use repository::InMemoryPostRepository;

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
