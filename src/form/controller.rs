//! Edit form controller: binds a post to a draft and handles submission

use serde::Serialize;

use super::schema::{self, FieldErrors, PostDraft};
use crate::content::{Post, PostStore, StoreError};
use crate::notify::{Notification, NotificationSink};

/// Title of the toast shown after an accepted edit
pub const UPDATED_TITLE: &str = "Post Has Been Updated Successfully";

/// Result of looking up the post being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Post),
    NotFound { id: String },
}

impl Lookup {
    pub fn post(&self) -> Option<&Post> {
        match self {
            Lookup::Found(post) => Some(post),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// An accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub post_id: String,
    pub draft: PostDraft,
    pub notification: Notification,
    /// Set when the store was updated with the draft
    pub updated: Option<Post>,
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Confirmation),
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Drives the edit flow for one post store
pub struct EditFormController<'a, S: PostStore + ?Sized> {
    store: &'a S,
    write_back: bool,
}

impl<'a, S: PostStore + ?Sized> EditFormController<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            write_back: false,
        }
    }

    /// Apply accepted drafts to the store
    pub fn with_write_back(mut self, write_back: bool) -> Self {
        self.write_back = write_back;
        self
    }

    /// Look up the post to edit
    pub fn load(&self, post_id: &str) -> Lookup {
        match self.store.get(post_id) {
            Some(post) => Lookup::Found(post),
            None => {
                tracing::debug!("No post with id {:?}", post_id);
                Lookup::NotFound {
                    id: post_id.to_string(),
                }
            }
        }
    }

    /// Seed form state from a lookup; empty fields when nothing was found
    pub fn initialize_draft(&self, lookup: &Lookup) -> PostDraft {
        lookup.post().map(PostDraft::from).unwrap_or_default()
    }

    /// Validate a draft and, when it passes, notify the sink
    ///
    /// The sink is not called for rejected drafts or failed write-backs.
    pub fn submit(
        &self,
        post_id: &str,
        draft: PostDraft,
        sink: &dyn NotificationSink,
    ) -> Result<SubmitOutcome, StoreError> {
        if let Err(errors) = schema::validate(&draft) {
            tracing::debug!("Rejected edit of post {:?}: {}", post_id, errors);
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let updated = if self.write_back {
            Some(self.store.update(post_id, &draft.clone().into_patch())?)
        } else {
            None
        };

        let notification = Notification::new(
            UPDATED_TITLE,
            format!("Updated by {} on {}", draft.author, draft.date),
        );
        sink.notify(notification.clone());

        Ok(SubmitOutcome::Accepted(Confirmation {
            post_id: post_id.to_string(),
            draft,
            notification,
            updated,
        }))
    }
}
