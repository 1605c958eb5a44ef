//! postdesk: a small blog admin
//!
//! Lists posts, shows a post's comments and edits a post's title, body,
//! author and date through a validated form. Posts come from a static list
//! held in memory; accepted edits raise a notification and, only when
//! `write_back` is enabled, update the in-memory copy.

pub mod commands;
pub mod config;
pub mod content;
pub mod form;
pub mod notify;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application
#[derive(Clone)]
pub struct Postdesk {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Post data file, when one is configured
    pub data_path: Option<PathBuf>,
}

impl Postdesk {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(config::CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let data_path = config.data_file.as_ref().map(|file| base_dir.join(file));

        Ok(Self {
            config,
            base_dir,
            data_path,
        })
    }

    /// Load the configured posts into a store
    pub fn load_store(&self) -> Result<content::InMemoryStore> {
        content::loader::ContentLoader::new(self).load_store()
    }

    /// Validate the stored posts
    pub fn check(&self) -> Result<commands::check::CheckReport> {
        commands::check::run(self)
    }
}
