//! Domain entities - the core business objects.

mod category;
mod post;

pub use category::CategorySummary;
pub use post::{Post, TimestampedPost};
