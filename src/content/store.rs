//! Post store: read-by-id access to an ordered post collection

use indexmap::IndexMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

use super::{Post, PostPatch};

/// Post store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate post id: {0}")]
    DuplicateId(String),

    #[error("Post not found: {0}")]
    NotFound(String),
}

/// Access to a collection of posts keyed by id
pub trait PostStore: Send + Sync {
    /// Look up a post by id
    fn get(&self, id: &str) -> Option<Post>;

    /// All posts in store order
    fn list(&self) -> Vec<Post>;

    /// Replace the editable fields of an existing post
    fn update(&self, id: &str, patch: &PostPatch) -> Result<Post, StoreError>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Store backed by an insertion-ordered map
#[derive(Debug, Default)]
pub struct InMemoryStore {
    posts: RwLock<IndexMap<String, Post>>,
}

impl InMemoryStore {
    /// Build a store from a post list, rejecting duplicate ids
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, StoreError> {
        let mut map = IndexMap::with_capacity(posts.len());
        for post in posts {
            if map.contains_key(&post.id) {
                return Err(StoreError::DuplicateId(post.id));
            }
            map.insert(post.id.clone(), post);
        }
        Ok(Self {
            posts: RwLock::new(map),
        })
    }
}

impl PostStore for InMemoryStore {
    fn get(&self, id: &str) -> Option<Post> {
        let posts = self.posts.read().unwrap_or_else(PoisonError::into_inner);
        posts.get(id).cloned()
    }

    fn list(&self) -> Vec<Post> {
        let posts = self.posts.read().unwrap_or_else(PoisonError::into_inner);
        posts.values().cloned().collect()
    }

    fn update(&self, id: &str, patch: &PostPatch) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        let post = posts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        post.apply(patch);
        tracing::debug!("Updated post {}", id);
        Ok(post.clone())
    }

    fn len(&self) -> usize {
        self.posts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryStore {
        InMemoryStore::from_posts(vec![
            Post::new("b", "Second", "Body B", "Bob", "2024-02-01"),
            Post::new("a", "First", "Body A", "Alice", "2024-01-01"),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let store = sample();
        assert_eq!(store.get("a").unwrap().title, "First");
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_list_keeps_source_order() {
        let ids: Vec<_> = sample().list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = InMemoryStore::from_posts(vec![
            Post::new("1", "One", "", "", ""),
            Post::new("1", "Also one", "", "", ""),
        ]);
        assert_eq!(result.unwrap_err(), StoreError::DuplicateId("1".to_string()));
    }

    #[test]
    fn test_update() {
        let store = sample();
        let patch = PostPatch {
            title: "Renamed".to_string(),
            body: "Body A".to_string(),
            author: "Alice".to_string(),
            date: "2024-01-02".to_string(),
        };
        let updated = store.update("a", &patch).unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(store.get("a").unwrap().date, "2024-01-02");

        assert_eq!(
            store.update("zzz", &patch).unwrap_err(),
            StoreError::NotFound("zzz".to_string())
        );
    }

    #[test]
    fn test_len() {
        assert_eq!(sample().len(), 2);
        assert!(InMemoryStore::default().is_empty());
    }
}
