//! Content module - posts, comments and the post store

pub mod loader;
mod markdown;
mod post;
mod store;

pub use markdown::MarkdownRenderer;
pub use post::{Post, PostComment, PostPatch};
pub use store::{InMemoryStore, PostStore, StoreError};
