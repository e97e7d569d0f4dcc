//! Validation and normalization of raw listing parameters.

use crate::error::QueryError;
use crate::query::PostQuery;
use crate::query::filter::{Filters, sanitize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 6;
pub const MAX_LIMIT: usize = 100;
/// Page or limit values above this are refused outright.
pub const MAX_PAGINATION_VALUE: f64 = 1_000_000.0;
pub const MIN_KEYWORD_LEN: usize = 2;

/// A numeric query value before range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RawNumber {
    Absent,
    Malformed,
    Value(f64),
}

impl RawNumber {
    fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return RawNumber::Absent;
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => RawNumber::Value(value),
            _ => RawNumber::Malformed,
        }
    }

    fn is_oversized(self) -> bool {
        matches!(self, RawNumber::Value(v) if v > MAX_PAGINATION_VALUE)
    }

    fn is_non_positive(self) -> bool {
        match self {
            RawNumber::Malformed => true,
            RawNumber::Value(v) => v < 1.0,
            RawNumber::Absent => false,
        }
    }

    /// Truncated integer value, or `default` when absent.
    fn normalize(self, default: usize, max: usize) -> usize {
        match self {
            RawNumber::Value(v) => (v.trunc() as usize).clamp(1, max),
            _ => default,
        }
    }
}

/// Listing parameters after validation: numbers in range, text sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub page: usize,
    pub limit: usize,
    pub filters: Filters,
}

impl ValidatedQuery {
    /// Check every parameter of `query` and normalize it.
    ///
    /// Oversized pagination values short-circuit before anything else.
    /// Remaining pagination problems are collected into a single
    /// [`QueryError::InvalidPagination`]; the keyword is checked last.
    pub fn parse(query: &PostQuery) -> Result<Self, QueryError> {
        let page = RawNumber::parse(query.page.as_deref());
        let limit = RawNumber::parse(query.limit.as_deref());

        if page.is_oversized() || limit.is_oversized() {
            return Err(QueryError::PaginationTooLarge);
        }

        let mut details = Vec::new();
        if page.is_non_positive() {
            details.push("page must be a positive number".to_string());
        }
        if limit.is_non_positive() {
            details.push("limit must be a positive number".to_string());
        }
        if matches!(limit, RawNumber::Value(v) if v > MAX_LIMIT as f64) {
            details.push(format!("limit cannot exceed {MAX_LIMIT}"));
        }
        if !details.is_empty() {
            return Err(QueryError::InvalidPagination { details });
        }

        if let Some(keyword) = query.keyword.as_deref().map(str::trim)
            && !keyword.is_empty()
            && keyword.chars().count() < MIN_KEYWORD_LEN
        {
            return Err(QueryError::KeywordTooShort);
        }

        Ok(Self {
            page: page.normalize(DEFAULT_PAGE, usize::MAX),
            limit: limit.normalize(DEFAULT_LIMIT, MAX_LIMIT),
            filters: Filters {
                category: sanitize(query.category.as_deref()),
                keyword: sanitize(query.keyword.as_deref()),
            },
        })
    }
}
