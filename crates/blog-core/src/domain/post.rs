use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog post from the seed collection.
///
/// Posts are immutable once loaded; the query pipeline clones the ones it
/// returns and never writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
}

impl Post {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    /// Searchable text fields, in match order.
    pub fn text_fields(&self) -> [&str; 4] {
        [
            &self.title,
            &self.description,
            &self.content,
            &self.category,
        ]
    }
}

/// A post returned by id lookup, stamped with the time it was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampedPost {
    #[serde(flatten)]
    pub post: Post,
    pub requested_at: DateTime<Utc>,
}
