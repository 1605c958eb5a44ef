//! Initialize a new postdesk site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILE;
use crate::content::loader;

/// Default configuration written by `postdesk init`
const DEFAULT_CONFIG: &str = r#"# Postdesk Configuration

# Site
title: Postdesk
subtitle: ''

# Data
data_file: data/posts.yml

# Editing
## Apply accepted edits to the in-memory posts (nothing is written to disk)
write_back: false
excerpt_length: 120
toast_capacity: 8

# Layout
menu:
  - name: Posts
    path: /posts
sidebar:
  - name: Dashboard
    path: /
  - name: Posts
    path: /posts
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("data"))?;
    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!("Created: {:?}", config_path);

    let data_path = target_dir.join("data/posts.yml");
    if data_path.exists() {
        tracing::info!("Keeping existing {:?}", data_path);
    } else {
        fs::write(&data_path, loader::sample_data())?;
        tracing::debug!("Created: {:?}", data_path);
    }

    Ok(())
}
