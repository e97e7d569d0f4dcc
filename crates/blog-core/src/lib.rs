//! # Blog Core
//!
//! The domain layer of the blog API.
//! This crate holds the post query pipeline (validation, sanitization,
//! filtering, pagination) and the id lookup, with zero infrastructure
//! dependencies. Every operation reads an immutable slice of posts and
//! returns freshly allocated results.

pub mod categories;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod ports;
pub mod query;
pub mod service;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{QueryError, RepoError};
pub use query::{PageResult, PostQuery, list_posts};
pub use service::PostService;
