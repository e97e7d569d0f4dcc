//! Category and keyword filters.
//!
//! Filter semantics work like SQL `WHERE` clauses: an unset filter matches
//! everything, a set filter drops posts that don't match it.

use crate::domain::Post;

/// Sanitized text filters. Both values are trimmed and lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub category: Option<String>,
    pub keyword: Option<String>,
}

impl Filters {
    /// Posts matching every set filter, in their original order.
    ///
    /// The category filter runs first; the keyword filter only sees its
    /// survivors.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts
            .iter()
            .filter(|post| self.matches_category(post))
            .filter(|post| self.matches_keyword(post))
            .collect()
    }

    fn matches_category(&self, post: &Post) -> bool {
        match &self.category {
            Some(category) => post.category.trim().to_lowercase() == *category,
            None => true,
        }
    }

    fn matches_keyword(&self, post: &Post) -> bool {
        match &self.keyword {
            Some(keyword) => post
                .text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(keyword.as_str())),
            None => true,
        }
    }
}

/// Trim and lower-case a text parameter; blank input means "no filter".
pub(crate) fn sanitize(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::post;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(None), None);
        assert_eq!(sanitize(Some("")), None);
        assert_eq!(sanitize(Some(" \t ")), None);
        assert_eq!(sanitize(Some("  Web Dev ")), Some("web dev".to_string()));
    }

    #[test]
    fn test_stored_category_whitespace_is_ignored() {
        let posts = vec![post(1, "a", "b", "c", " Tech\n")];
        let filters = Filters {
            category: Some("tech".to_string()),
            keyword: None,
        };
        assert_eq!(filters.apply(&posts).len(), 1);
    }

    #[test]
    fn test_category_is_exact_not_substring() {
        let posts = vec![post(1, "a", "b", "c", "technology")];
        let filters = Filters {
            category: Some("tech".to_string()),
            keyword: None,
        };
        assert!(filters.apply(&posts).is_empty());
    }

    #[test]
    fn test_filtering_preserves_relative_order() {
        let posts = vec![
            post(5, "rust one", "", "", "x"),
            post(2, "go", "", "", "x"),
            post(9, "rust two", "", "", "x"),
            post(1, "rust three", "", "", "x"),
        ];
        let filters = Filters {
            category: None,
            keyword: Some("rust".to_string()),
        };
        let ids: Vec<u64> = filters.apply(&posts).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 9, 1]);
    }
}
