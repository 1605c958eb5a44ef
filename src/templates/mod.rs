//! Admin templates using the Tera template engine
//!
//! Templates are embedded in the binary. Every page extends `layout.html`,
//! which provides the navbar, the sidebar, the content slot and the toast
//! area.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{LinkItem, SiteConfig};
use crate::form::{Field, FieldErrors, PostDraft};
use crate::notify::Toast;

/// Embedded stylesheet served at `/static/admin.css`
pub const ADMIN_CSS: &str = include_str!("admin/admin.css");

/// Template renderer with the embedded admin templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all admin templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post fields are user input; keep Tera's HTML autoescaping for *.html.
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("admin/layout.html")),
            ("posts.html", include_str!("admin/posts.html")),
            ("post.html", include_str!("admin/post.html")),
            ("edit.html", include_str!("admin/edit.html")),
            ("not_found.html", include_str!("admin/not_found.html")),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 120,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    Ok(tera::Value::String(truncate_chars(&s, length, &omission)))
}

/// Truncate to `length` characters, appending `omission` when cut
pub fn truncate_chars(s: &str, length: usize, omission: &str) -> String {
    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(length).collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub menu: Vec<LinkItem>,
    pub sidebar: Vec<LinkItem>,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            menu: config.menu.clone(),
            sidebar: config.sidebar.clone(),
        }
    }
}

/// One input of the edit form
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub multiline: bool,
}

impl FieldView {
    /// Build the form inputs for a draft, attaching any field errors
    pub fn for_draft(draft: &PostDraft, errors: Option<&FieldErrors>) -> Vec<FieldView> {
        Field::ALL
            .iter()
            .map(|&field| FieldView {
                name: field.name(),
                label: field.label(),
                value: draft.value(field).to_string(),
                error: errors
                    .and_then(|e| e.get(field))
                    .map(|e| e.to_string()),
                multiline: field == Field::Body,
            })
            .collect()
    }
}

/// Base context shared by every page
pub fn page_context(site: &SiteData, toasts: &[Toast]) -> Context {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("toasts", toasts);
    context
}
