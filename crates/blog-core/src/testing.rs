//! Fixture posts shared by the unit tests.

use crate::domain::Post;

pub fn post(id: u64, title: &str, description: &str, content: &str, category: &str) -> Post {
    Post::new(id, title, description, content, category)
}

/// Ten posts: three "Tech", three "Food", two "Travel", two "Lifestyle".
pub fn fixture_posts() -> Vec<Post> {
    vec![
        post(1, "Getting started with Rust", "Ownership basics", "Borrowing explained.", "Tech"),
        post(2, "Pasta night", "A quick recipe", "Boil water, add salt.", "Food"),
        post(3, "Lisbon in spring", "Trams and tiles", "Walk up to the castle.", "Travel"),
        post(4, "Async in practice", "Futures and executors", "Pinning demystified.", "tech"),
        post(5, "Sourdough starter", "Recipe for patience", "Feed it daily.", "Food"),
        post(6, "Morning routines", "Small habits", "Wake up, stretch.", "Lifestyle"),
        post(7, "Databases without tears", "Indexes 101", "B-trees everywhere.", "TECH"),
        post(8, "Street food of Hanoi", "Pho and banh mi", "Eat where the locals eat.", "Food"),
        post(9, "Packing light", "One bag travel", "Roll your shirts.", "Travel"),
        post(10, "Minimalist desk", "Fewer things", "Clear surfaces, clear mind.", "Lifestyle"),
    ]
}
