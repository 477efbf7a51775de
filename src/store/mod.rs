//! # Entity Store
//!
//! [`CourseStore`] owns the authoritative module sequence and resource sequence.
//! It is the only component that mutates them: CRUD goes through its methods,
//! moves go through [`CourseStore::apply_move`], and everyone else reads
//! [`CourseSnapshot`]s.
//!
//! ## Invariants
//!
//! - Module ids and resource ids are unique (the store assigns them).
//! - A resource's `module_id`, when present, names an existing module.
//! - Every operation either fully applies or leaves both sequences untouched.
//!
//! The store is plain synchronous data. Serialized access is provided by the
//! [`BuilderActor`](crate::actor::BuilderActor), which owns exactly one store.

pub mod entity;
pub mod error;
pub mod sequence;

pub use entity::*;
pub use error::*;
pub use sequence::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::engine::{self, MoveIntent, MoveOutcome};
use crate::model::{
    Module, ModuleCreate, ModuleId, ModuleUpdate, Resource, ResourceCreate, ResourceId,
    ResourceUpdate,
};

/// What happens to a module's resources when the module is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Delete the resources together with the module.
    #[default]
    Cascade,
    /// Move the resources into the unassigned pool, keeping their order.
    Unassign,
}

/// Result of deleting a module.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRemoval {
    pub module: Module,
    /// Resources deleted along with the module (cascade policy).
    pub removed: Vec<Resource>,
    /// Resources moved to the unassigned pool (unassign policy).
    pub unassigned: Vec<ResourceId>,
}

/// A read-only copy of both sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    pub modules: Vec<Module>,
    pub resources: Vec<Resource>,
}

impl CourseSnapshot {
    /// True when there is nothing at all to show (the empty-state screen).
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.resources.is_empty()
    }

    /// The ordered resources of one container (`None` = unassigned).
    pub fn container(&self, module_id: Option<ModuleId>) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.module_id == module_id)
            .collect()
    }

    pub fn module_position(&self, id: ModuleId) -> Option<usize> {
        self.modules.iter().position(|m| m.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct CourseStore {
    modules: OrderedSequence<Module>,
    resources: OrderedSequence<Resource>,
    next_module_id: u32,
    next_resource_id: u32,
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseStore {
    pub fn new() -> Self {
        Self {
            modules: OrderedSequence::new(),
            resources: OrderedSequence::new(),
            next_module_id: 1,
            next_resource_id: 1,
        }
    }

    pub fn modules(&self) -> &[Module] {
        self.modules.as_slice()
    }

    pub fn resources(&self) -> &[Resource] {
        self.resources.as_slice()
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(&id)
    }

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(&id)
    }

    pub fn snapshot(&self) -> CourseSnapshot {
        CourseSnapshot {
            modules: self.modules.as_slice().to_vec(),
            resources: self.resources.as_slice().to_vec(),
        }
    }

    /// Appends a new module to the end of the module sequence.
    pub fn create_module(&mut self, params: ModuleCreate) -> Result<Module, StoreError> {
        debug!(?params, "Create module");
        let id = ModuleId::from(self.next_module_id);
        let module = Module::from_create_params(id, params).inspect_err(|e| {
            warn!(error = %e, "Create module rejected");
        })?;
        self.next_module_id += 1;
        self.modules.push(module.clone());
        info!(module_id = %id, size = self.modules.len(), "Module created");
        Ok(module)
    }

    /// Appends a new resource to the end of the resource sequence.
    pub fn create_resource(&mut self, params: ResourceCreate) -> Result<Resource, StoreError> {
        debug!(?params, "Create resource");
        let id = ResourceId::from(self.next_resource_id);
        let resource = Resource::from_create_params(id, params).inspect_err(|e| {
            warn!(error = %e, "Create resource rejected");
        })?;
        if let Some(module_id) = resource.module_id {
            if !self.modules.contains(&module_id) {
                warn!(%module_id, "Create resource references unknown module");
                return Err(ReferenceError::ModuleNotFound(module_id).into());
            }
        }
        self.next_resource_id += 1;
        self.resources.push(resource.clone());
        info!(
            resource_id = %id,
            kind = ?resource.kind(),
            module_id = ?resource.module_id,
            size = self.resources.len(),
            "Resource created"
        );
        Ok(resource)
    }

    pub fn update_module(&mut self, id: ModuleId, update: ModuleUpdate) -> Result<Module, StoreError> {
        debug!(module_id = %id, ?update, "Update module");
        let slot = self
            .modules
            .get_mut(&id)
            .ok_or(ReferenceError::ModuleNotFound(id))?;
        let mut next = slot.clone();
        next.on_update(update).inspect_err(|e| {
            warn!(module_id = %id, error = %e, "Update module rejected");
        })?;
        *slot = next.clone();
        info!(module_id = %id, "Module updated");
        Ok(next)
    }

    pub fn update_resource(
        &mut self,
        id: ResourceId,
        update: ResourceUpdate,
    ) -> Result<Resource, StoreError> {
        debug!(resource_id = %id, ?update, "Update resource");
        let slot = self
            .resources
            .get_mut(&id)
            .ok_or(ReferenceError::ResourceNotFound(id))?;
        let mut next = slot.clone();
        next.on_update(update).inspect_err(|e| {
            warn!(resource_id = %id, error = %e, "Update resource rejected");
        })?;
        *slot = next.clone();
        info!(resource_id = %id, "Resource updated");
        Ok(next)
    }

    /// Deletes a module and cascades to its resources.
    pub fn delete_module(&mut self, id: ModuleId) -> Result<ModuleRemoval, StoreError> {
        self.delete_module_with(id, DeletePolicy::Cascade)
    }

    pub fn delete_module_with(
        &mut self,
        id: ModuleId,
        policy: DeletePolicy,
    ) -> Result<ModuleRemoval, StoreError> {
        let module = self
            .modules
            .remove(&id)
            .ok_or(ReferenceError::ModuleNotFound(id))?;

        let mut removal = ModuleRemoval {
            module,
            removed: Vec::new(),
            unassigned: Vec::new(),
        };
        match policy {
            DeletePolicy::Cascade => {
                removal.removed = self.resources.drain_where(|r| r.module_id == Some(id));
            }
            DeletePolicy::Unassign => {
                let owned: Vec<ResourceId> = self
                    .resources
                    .iter()
                    .filter(|r| r.module_id == Some(id))
                    .map(|r| r.id)
                    .collect();
                for resource_id in &owned {
                    if let Some(resource) = self.resources.get_mut(resource_id) {
                        resource.module_id = None;
                    }
                }
                removal.unassigned = owned;
            }
        }
        info!(
            module_id = %id,
            ?policy,
            removed = removal.removed.len(),
            unassigned = removal.unassigned.len(),
            modules = self.modules.len(),
            resources = self.resources.len(),
            "Module deleted"
        );
        Ok(removal)
    }

    pub fn delete_resource(&mut self, id: ResourceId) -> Result<Resource, StoreError> {
        let resource = self
            .resources
            .remove(&id)
            .ok_or(ReferenceError::ResourceNotFound(id))?;
        info!(resource_id = %id, size = self.resources.len(), "Resource deleted");
        Ok(resource)
    }

    /// Applies a move intent against the current sequences.
    ///
    /// Never fails: stale or inconsistent intents come back as
    /// [`MoveOutcome::Unchanged`].
    pub fn apply_move(&mut self, intent: MoveIntent) -> MoveOutcome {
        let outcome = match intent {
            MoveIntent::ReorderModules {
                drag_index,
                hover_index,
            } => engine::reorder_modules(&mut self.modules, drag_index, hover_index),
            MoveIntent::MoveResource { dragged, target } => {
                engine::move_resource(&mut self.resources, dragged, target)
            }
            MoveIntent::DropResource { resource, target } => {
                engine::drop_resource(&self.modules, &mut self.resources, resource, target)
            }
        };
        match &outcome {
            MoveOutcome::Unchanged(reason) => debug!(?intent, ?reason, "Move ignored"),
            applied => info!(?intent, outcome = ?applied, "Move applied"),
        }
        outcome
    }
}
