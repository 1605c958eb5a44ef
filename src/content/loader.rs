//! Content loader - reads the post list from a YAML or JSON data file

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{InMemoryStore, Post};
use crate::Postdesk;

/// Sample posts used when no data file is configured
const SAMPLE_POSTS: &str = include_str!("../../data/posts.yml");

/// Serialization format of a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => DataFormat::Json,
            _ => DataFormat::Yaml,
        }
    }
}

/// Loads the post list configured for a site
pub struct ContentLoader<'a> {
    app: &'a Postdesk,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(app: &'a Postdesk) -> Self {
        Self { app }
    }

    /// Load all posts, in data file order
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        match &self.app.data_path {
            Some(path) => load_posts(path),
            None => {
                tracing::debug!("No data_file configured, using sample posts");
                sample_posts()
            }
        }
    }

    /// Load the posts into a store
    pub fn load_store(&self) -> Result<InMemoryStore> {
        let posts = self.load_posts()?;
        let count = posts.len();
        let store = InMemoryStore::from_posts(posts)?;
        tracing::info!("Loaded {} posts", count);
        Ok(store)
    }
}

/// Read posts from a data file
pub fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    parse_posts(&content, DataFormat::from_path(path))
        .with_context(|| format!("Failed to parse {:?}", path))
}

/// Parse a post list
pub fn parse_posts(content: &str, format: DataFormat) -> Result<Vec<Post>> {
    let posts = match format {
        DataFormat::Yaml => serde_yaml::from_str(content)?,
        DataFormat::Json => serde_json::from_str(content)?,
    };
    Ok(posts)
}

/// The built-in sample posts
pub fn sample_posts() -> Result<Vec<Post>> {
    parse_posts(SAMPLE_POSTS, DataFormat::Yaml)
}

/// The built-in sample data, as written by `postdesk init`
pub fn sample_data() -> &'static str {
    SAMPLE_POSTS
}
