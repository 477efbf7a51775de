//! # Entity Trait
//!
//! The `Entity` trait defines the contract that every stored item (Module, Resource)
//! implements so that one generic [`OrderedSequence`](super::OrderedSequence) can hold
//! either kind. It specifies associated types for IDs and DTOs and provides the
//! construction and update hooks the store calls.
//!
//! We use associated types (`type Id`, `type Create`, ...) to enforce type safety:
//! a `Module` requires a `ModuleCreate` payload, and you can't hand it a
//! `ResourceCreate` by accident.
//!
//! # Atomicity
//! The store calls [`Entity::on_update`] on a *copy* of the stored item and only
//! writes the copy back when the hook succeeds, so a hook is free to fail halfway.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::ValidationError;
use crate::model::{
    parse_url, validate_title, Module, ModuleCreate, ModuleUpdate, PayloadCreate, Resource,
    ResourceCreate, ResourcePayload, ResourceUpdate,
};

pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Copy + Eq + Hash + Display + Debug + Send + Sync + From<u32>;

    /// The data required to create a new instance.
    type Create: Debug + Send;

    /// The data required to update an existing instance.
    type Update: Debug + Send;

    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and Payload, validating the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, ValidationError>;

    /// Apply an update in place.
    fn on_update(&mut self, update: Self::Update) -> Result<(), ValidationError>;
}

fn validate_module_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyModuleName);
    }
    Ok(name.to_string())
}

impl Entity for Module {
    type Id = crate::model::ModuleId;
    type Create = ModuleCreate;
    type Update = ModuleUpdate;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn from_create_params(id: Self::Id, params: ModuleCreate) -> Result<Self, ValidationError> {
        Ok(Module::new(id, validate_module_name(&params.name)?))
    }

    fn on_update(&mut self, update: ModuleUpdate) -> Result<(), ValidationError> {
        self.name = validate_module_name(&update.name)?;
        Ok(())
    }
}

impl Entity for Resource {
    type Id = crate::model::ResourceId;
    type Create = ResourceCreate;
    type Update = ResourceUpdate;

    fn id(&self) -> Self::Id {
        self.id
    }

    /// Builds a resource from validated parts.
    ///
    /// The owning module is *not* checked here; resolving `module_id` is the
    /// store's job because it needs the module sequence.
    fn from_create_params(id: Self::Id, params: ResourceCreate) -> Result<Self, ValidationError> {
        let title = validate_title(&params.title)?;
        let payload = match params.payload {
            PayloadCreate::Link { url } => ResourcePayload::Link {
                url: parse_url(&url)?,
            },
            PayloadCreate::File(Some(upload)) => ResourcePayload::File(upload),
            PayloadCreate::File(None) => return Err(ValidationError::MissingFile),
        };
        Ok(Resource {
            id,
            title,
            module_id: params.module_id,
            payload,
        })
    }

    /// # Fields Updated
    /// - `title`: replaced when present
    /// - `url`: Link resources only
    /// - `file`: File resources only; absent keeps the current binary
    fn on_update(&mut self, update: ResourceUpdate) -> Result<(), ValidationError> {
        if let Some(title) = update.title {
            self.title = validate_title(&title)?;
        }
        let kind = self.kind();
        match &mut self.payload {
            ResourcePayload::Link { url } => {
                if update.file.is_some() {
                    return Err(ValidationError::KindMismatch { kind, field: "file" });
                }
                if let Some(raw) = update.url {
                    *url = parse_url(&raw)?;
                }
            }
            ResourcePayload::File(current) => {
                if update.url.is_some() {
                    return Err(ValidationError::KindMismatch { kind, field: "url" });
                }
                if let Some(upload) = update.file {
                    *current = upload;
                }
            }
        }
        Ok(())
    }
}
