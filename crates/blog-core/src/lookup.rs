//! Lookup of a single post by its id.

use std::num::IntErrorKind;

use chrono::{DateTime, Utc};

use crate::domain::{Post, TimestampedPost};
use crate::error::QueryError;

/// Ids above this are refused without scanning the collection.
pub const MAX_POST_ID: u64 = 1_000_000;

/// Parse a raw path segment into a post id.
///
/// Only plain decimal integers are accepted. Anything unparseable or
/// non-positive is [`QueryError::InvalidId`]; values past [`MAX_POST_ID`]
/// (including ones that overflow) are [`QueryError::IdTooLarge`].
pub fn parse_id(raw: &str) -> Result<u64, QueryError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(id) if id <= 0 => Err(QueryError::InvalidId(raw.to_string())),
        Ok(id) if id as u64 > MAX_POST_ID => Err(QueryError::IdTooLarge(raw.to_string())),
        Ok(id) => Ok(id as u64),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(QueryError::IdTooLarge(raw.to_string()))
        }
        Err(_) => Err(QueryError::InvalidId(raw.to_string())),
    }
}

/// Find the first post whose id matches `raw_id`.
///
/// `requested_at` is supplied by the caller so the lookup stays
/// deterministic.
pub fn find_post(
    posts: &[Post],
    raw_id: &str,
    requested_at: DateTime<Utc>,
) -> Result<TimestampedPost, QueryError> {
    let id = parse_id(raw_id)?;
    posts
        .iter()
        .find(|post| post.id == id)
        .map(|post| TimestampedPost {
            post: post.clone(),
            requested_at,
        })
        .ok_or(QueryError::NotFound { requested_id: id })
}
