//! Site configuration (postdesk.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file inside a site directory
pub const CONFIG_FILE: &str = "postdesk.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,

    // Data
    /// Post list, relative to the site directory. Built-in samples when unset.
    pub data_file: Option<String>,

    // Editing
    /// Apply accepted edits to the in-memory store
    pub write_back: bool,
    pub excerpt_length: usize,
    pub toast_capacity: usize,

    // Layout
    pub menu: Vec<LinkItem>,
    pub sidebar: Vec<LinkItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Postdesk".to_string(),
            subtitle: String::new(),

            data_file: None,

            write_back: false,
            excerpt_length: 120,
            toast_capacity: 8,

            menu: vec![LinkItem::new("Posts", "/posts")],
            sidebar: vec![
                LinkItem::new("Dashboard", "/"),
                LinkItem::new("Posts", "/posts"),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }
}

/// A navigation link rendered in the navbar or sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub name: String,
    pub path: String,
}

impl LinkItem {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}
