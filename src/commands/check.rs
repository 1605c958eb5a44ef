//! Check stored posts against the edit form's validation rules

use anyhow::Result;

use crate::content::PostStore;
use crate::form::{self, FieldErrors, PostDraft};
use crate::Postdesk;

/// Posts that would be rejected if submitted unchanged
#[derive(Debug, Default)]
pub struct CheckReport {
    pub total: usize,
    pub failures: Vec<(String, FieldErrors)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load the posts (rejecting duplicate ids) and validate each one
pub fn run(app: &Postdesk) -> Result<CheckReport> {
    let store = app.load_store()?;
    let mut report = CheckReport::default();

    for post in store.list() {
        report.total += 1;
        if let Err(errors) = form::validate(&PostDraft::from(&post)) {
            tracing::debug!("Post {:?} fails validation: {}", post.id, errors);
            report.failures.push((post.id, errors));
        }
    }

    Ok(report)
}
