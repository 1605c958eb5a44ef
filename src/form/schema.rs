//! Validation schema for the post edit form

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::Validate;

use crate::content::{Post, PostPatch};

/// An editable post field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Body,
    Author,
    Date,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [Field::Title, Field::Body, Field::Author, Field::Date];

    /// Form field name
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Body => "body",
            Field::Author => "author",
            Field::Date => "date",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Body => "Body",
            Field::Author => "Author",
            Field::Date => "Date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field-level validation failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    RequiredFieldMissing(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::RequiredFieldMissing(field) => *field,
        }
    }
}

/// Validation failures keyed by field, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: IndexMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.values().map(|e| e.to_string()).collect();
        f.write_str(&messages.join(", "))
    }
}

/// The in-progress, unsaved copy of a post's editable fields
///
/// Absent form fields deserialize as empty strings and fail validation.
/// `Author` and `Date` are accepted as input spellings of the lowercase
/// field names. Sending both spellings of one field is a deserialization
/// error (duplicate field), so it never reaches `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PostDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    #[serde(alias = "Author")]
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,

    #[serde(alias = "Date")]
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
}

impl PostDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Body => &self.body,
            Field::Author => &self.author,
            Field::Date => &self.date,
        }
    }

    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            title: self.title,
            body: self.body,
            author: self.author,
            date: self.date,
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
        }
    }
}

/// Check a draft against the required-field rules
pub fn validate(draft: &PostDraft) -> Result<(), FieldErrors> {
    let Err(report) = draft.validate() else {
        return Ok(());
    };

    let failed = report.field_errors();
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if failed.contains_key(field.name()) {
            errors.insert(FieldError::RequiredFieldMissing(field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
