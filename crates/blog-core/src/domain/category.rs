use serde::Serialize;

/// Number of posts filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Category as spelled by the first post that uses it.
    pub category: String,
    pub count: usize,
}
