use serde::Serialize;

use crate::domain::Post;

/// One page of filtered posts plus the metadata needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Posts matching the filters, before paging.
    pub total_posts: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub limit: usize,
    pub posts: Vec<Post>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<usize>,
}

impl PageResult {
    /// Cut page `page` (1-based) of size `limit` out of `matching`.
    ///
    /// A page past the end is not an error: it comes back empty with
    /// `current_page` echoed as requested.
    pub fn paginate(matching: &[&Post], page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        let page = page.max(1);
        let total_posts = matching.len();

        let start = (page - 1).saturating_mul(limit);
        let end = start.saturating_add(limit);

        let posts = matching
            .iter()
            .skip(start)
            .take(limit)
            .map(|post| (*post).clone())
            .collect();

        let has_next_page = end < total_posts;
        let has_previous_page = start > 0;

        Self {
            total_posts,
            total_pages: total_posts.div_ceil(limit),
            current_page: page,
            limit,
            posts,
            has_next_page,
            has_previous_page,
            next_page: has_next_page.then(|| page + 1),
            previous_page: has_previous_page.then(|| page - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_posts;

    #[test]
    fn test_middle_page_links_both_ways() {
        let posts = fixture_posts();
        let refs: Vec<&Post> = posts.iter().collect();
        let page = PageResult::paginate(&refs, 2, 3);

        let ids: Vec<u64> = page.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.next_page, Some(3));
        assert_eq!(page.previous_page, Some(1));
    }

    #[test]
    fn test_exact_multiple_has_no_next_page() {
        let posts = fixture_posts();
        let refs: Vec<&Post> = posts.iter().collect();
        let page = PageResult::paginate(&refs, 2, 5);

        assert_eq!(page.posts.len(), 5);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_empty_input() {
        let page = PageResult::paginate(&[], 1, 6);
        assert_eq!(page.total_posts, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.posts.is_empty());
        assert!(!page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn test_serializes_camel_case_and_omits_absent_links() {
        let posts = fixture_posts();
        let refs: Vec<&Post> = posts.iter().take(2).collect();
        let page = PageResult::paginate(&refs, 1, 6);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPosts"], 2);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["hasNextPage"], false);
        assert_eq!(json["hasPreviousPage"], false);
        assert!(json.get("nextPage").is_none());
        assert!(json.get("previousPage").is_none());
    }
}
