//! Errors surfaced to the form that initiated a submission.

use thiserror::Error;

use crate::actor::BuilderError;
use crate::model::{TITLE_MAX_CHARS, TITLE_MIN_CHARS};
use crate::store::{StoreError, ValidationError};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// Another submission from the same form has not completed yet.
    #[error("A submission is already in progress")]
    SubmissionPending,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Builder(#[from] BuilderError),
}

impl FormError {
    /// The message shown above the form fields.
    pub fn user_message(&self) -> String {
        match self {
            FormError::SubmissionPending => "Saving...".to_string(),
            FormError::Validation(e) => validation_message(e),
            FormError::Builder(BuilderError::Store(StoreError::Validation(e))) => {
                validation_message(e)
            }
            FormError::Builder(BuilderError::Store(StoreError::Reference(_))) => {
                "This item no longer exists".to_string()
            }
            FormError::Builder(_) => "Something went wrong, please try again".to_string(),
        }
    }
}

pub fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::EmptyModuleName => "Please enter a module name".to_string(),
        ValidationError::MissingTitle => "Please enter a title".to_string(),
        ValidationError::TitleTooShort { .. } => {
            format!("Title must be at least {TITLE_MIN_CHARS} characters")
        }
        ValidationError::TitleTooLong { .. } => {
            format!("Title must be at most {TITLE_MAX_CHARS} characters")
        }
        ValidationError::InvalidUrl { .. } => "Please enter a valid URL".to_string(),
        ValidationError::UnsupportedMediaType(_) => {
            "Please upload a PDF, JPEG, or PNG file".to_string()
        }
        ValidationError::MissingFile => "Please select a file".to_string(),
        ValidationError::KindMismatch { .. } => error.to_string(),
    }
}
