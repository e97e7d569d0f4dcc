//! The posts listing pipeline: validate → sanitize → filter → paginate.
//!
//! [`list_posts`] is a pure function of the collection and the raw query
//! string values. It performs no I/O and never mutates `posts`.

mod filter;
mod paginate;
mod params;

use serde::Deserialize;

use crate::domain::Post;
use crate::error::QueryError;

pub use filter::Filters;
pub use paginate::PageResult;
pub use params::{
    DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, MAX_PAGINATION_VALUE, MIN_KEYWORD_LEN,
    ValidatedQuery,
};

/// Raw listing parameters exactly as they arrive in the query string.
///
/// Nothing is parsed at the boundary; numbers stay strings until
/// [`ValidatedQuery::parse`] looks at them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub keyword: Option<String>,
}

impl PostQuery {
    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

/// Validate `query`, filter `posts` and cut out the requested page.
pub fn list_posts(posts: &[Post], query: &PostQuery) -> Result<PageResult, QueryError> {
    let validated = ValidatedQuery::parse(query)?;
    let matching = validated.filters.apply(posts);
    Ok(PageResult::paginate(&matching, validated.page, validated.limit))
}
