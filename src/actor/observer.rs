//! Change notifications for collaborators that mirror the store, such as a
//! renderer or a persistence layer.

use async_trait::async_trait;
use std::sync::Arc;

use crate::engine::{MoveIntent, MoveOutcome};
use crate::model::{Module, ModuleId, Resource, ResourceId};
use crate::store::CourseStore;

/// A mutation that was applied to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    ModuleCreated(Module),
    ModuleUpdated(Module),
    ModuleDeleted {
        module_id: ModuleId,
        removed: Vec<ResourceId>,
        unassigned: Vec<ResourceId>,
    },
    ResourceCreated(Resource),
    ResourceUpdated(Resource),
    ResourceDeleted(ResourceId),
    Moved {
        intent: MoveIntent,
        outcome: MoveOutcome,
    },
}

/// Injected into [`BuilderActor::run`](super::BuilderActor::run) and called
/// after every applied mutation, before the next request is processed.
///
/// Rejected CRUD requests and no-op moves produce no notification.
#[async_trait]
pub trait ChangeObserver: Send + Sync {
    async fn on_change(&self, change: &StoreChange, store: &CourseStore);
}

pub type Observers = Vec<Arc<dyn ChangeObserver>>;
