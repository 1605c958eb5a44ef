//! Post edit form: validation schema and controller

mod controller;
mod schema;

pub use controller::{Confirmation, EditFormController, Lookup, SubmitOutcome, UPDATED_TITLE};
pub use schema::{validate, Field, FieldError, FieldErrors, PostDraft};
