//! # Actor Errors
//!
//! Errors returned by [`BuilderClient`](super::BuilderClient). Store errors pass
//! through untouched so callers can match on validation vs. reference failures.

use thiserror::Error;

use crate::store::{ReferenceError, StoreError, ValidationError};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuilderError {
    #[error("Builder actor closed")]
    ActorClosed,

    #[error("Builder actor dropped response channel")]
    ActorDropped,

    #[error("Builder actor task failed: {0}")]
    ActorFailed(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BuilderError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            BuilderError::Store(StoreError::Validation(e)) => Some(e),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<&ReferenceError> {
        match self {
            BuilderError::Store(StoreError::Reference(e)) => Some(e),
            _ => None,
        }
    }
}
