//! # Forms
//!
//! The data side of the create/edit dialogs: what the author typed, how it is
//! validated, and how it is submitted. Rendering is left to the presentation
//! layer.
//!
//! Every form can be opened blank for a target container or prefilled from an
//! existing item. Editing works the same for unassigned resources as for
//! module-owned ones.
//!
//! ```rust
//! use course_builder::forms::{LinkForm, ResourceSubmission};
//!
//! let mut form = LinkForm::new(None);
//! form.title = "  Rust book ".into();
//! form.url = "https://doc.rust-lang.org/book/".into();
//!
//! match form.validate().unwrap() {
//!     ResourceSubmission::Create(params) => assert_eq!(params.title, "Rust book"),
//!     ResourceSubmission::Update { .. } => unreachable!(),
//! }
//! ```

pub mod error;
pub mod link;
pub mod module;
pub mod submitter;
pub mod upload;

pub use error::*;
pub use link::LinkForm;
pub use module::ModuleForm;
pub use submitter::Submitter;
pub use upload::UploadForm;

use crate::model::{ModuleCreate, ModuleId, ModuleUpdate, ResourceCreate, ResourceId, ResourceUpdate};

/// A validated module form, ready to send.
#[derive(Debug, Clone)]
pub enum ModuleSubmission {
    Create(ModuleCreate),
    Update { id: ModuleId, update: ModuleUpdate },
}

/// A validated link or upload form, ready to send.
#[derive(Debug, Clone)]
pub enum ResourceSubmission {
    Create(ResourceCreate),
    Update {
        id: ResourceId,
        update: ResourceUpdate,
    },
}
