//! Post and comment models

use serde::{Deserialize, Serialize};

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier, unique within a store
    pub id: String,

    pub title: String,

    pub body: String,

    pub author: String,

    /// Free text; never parsed as a calendar date
    pub date: String,

    /// Comments in display order. Older data files spell this `comment`.
    #[serde(default, alias = "comment")]
    pub comments: Vec<PostComment>,
}

impl Post {
    /// Create a post without comments
    pub fn new(id: &str, title: &str, body: &str, author: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            comments: Vec::new(),
        }
    }

    /// Apply the editable fields of a patch, keeping id and comments
    pub fn apply(&mut self, patch: &PostPatch) {
        self.title.clone_from(&patch.title);
        self.body.clone_from(&patch.body);
        self.author.clone_from(&patch.author);
        self.date.clone_from(&patch.date);
    }
}

/// A reply attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostComment {
    /// Unique within the parent post
    pub id: String,
    pub text: String,
    pub username: String,
}

impl PostComment {
    pub fn new(id: &str, text: &str, username: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            username: username.to_string(),
        }
    }
}

/// Replacement values for a post's editable fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: String,
    pub body: String,
    pub author: String,
    pub date: String,
}
