//! Error types for the entity store.

use thiserror::Error;

use crate::model::{ModuleId, ResourceId, ResourceKind};

/// Input that the store refuses to accept. Never mutates the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Module name must not be empty")]
    EmptyModuleName,

    #[error("Title is required")]
    MissingTitle,

    #[error("Title too short: {len} characters")]
    TitleTooShort { len: usize },

    #[error("Title too long: {len} characters")]
    TitleTooLong { len: usize },

    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("No file selected")]
    MissingFile,

    /// An edit carried a field that belongs to the other resource kind.
    #[error("{field} cannot be set on a {kind:?} resource")]
    KindMismatch {
        kind: ResourceKind,
        field: &'static str,
    },
}

/// A request named an id that does not resolve to a current entity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReferenceError {
    #[error("Module not found: {0}")]
    ModuleNotFound(ModuleId),

    #[error("Resource not found: {0}")]
    ResourceNotFound(ResourceId),
}

/// Errors returned by the store's CRUD operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}
