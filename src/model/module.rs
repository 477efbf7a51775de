use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub u32);

impl From<u32> for ModuleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "module_{}", self.0)
    }
}

/// Represents a named, ordered container of resources.
///
/// # Entity Store
/// This struct implements the [`Entity`](crate::store::Entity) trait,
/// allowing it to be held in an [`OrderedSequence`](crate::store::OrderedSequence).
///
/// See [`impl Entity for Module`](#impl-Entity-for-Module) for details on:
/// - Creation parameters ([`ModuleCreate`])
/// - Update parameters ([`ModuleUpdate`])
///
/// ```rust
/// use course_builder::model::{Module, ModuleId};
///
/// let module = Module::new(ModuleId(1), "Week 1");
/// assert_eq!(module.id.to_string(), "module_1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
}

impl Module {
    /// Creates a new Module instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the store)
    /// * `name` - Display name, already validated
    pub fn new(id: ModuleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Payload for creating a new module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCreate {
    pub name: String,
}

impl ModuleCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Payload for renaming an existing module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleUpdate {
    pub name: String,
}
