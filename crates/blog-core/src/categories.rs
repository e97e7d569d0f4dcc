//! Per-category post counts.

use crate::domain::{CategorySummary, Post};

/// Count posts per category.
///
/// Categories are grouped case-insensitively on their trimmed value and
/// reported with the spelling of the first post that uses them, in
/// first-seen order. Posts with a blank category are skipped.
pub fn summarize(posts: &[Post]) -> Vec<CategorySummary> {
    let mut keys: Vec<String> = Vec::new();
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for post in posts {
        let trimmed = post.category.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        match keys.iter().position(|k| *k == key) {
            Some(index) => summaries[index].count += 1,
            None => {
                keys.push(key);
                summaries.push(CategorySummary {
                    category: trimmed.to_string(),
                    count: 1,
                });
            }
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_posts, post};

    #[test]
    fn test_counts_case_insensitively_in_first_seen_order() {
        let summaries = summarize(&fixture_posts());
        let pairs: Vec<(&str, usize)> = summaries
            .iter()
            .map(|s| (s.category.as_str(), s.count))
            .collect();

        assert_eq!(
            pairs,
            vec![("Tech", 3), ("Food", 3), ("Travel", 2), ("Lifestyle", 2)]
        );
    }

    #[test]
    fn test_blank_categories_are_skipped() {
        let posts = vec![post(1, "a", "b", "c", "  "), post(2, "a", "b", "c", " News ")];
        let summaries = summarize(&posts);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].category, "News");
    }
}
