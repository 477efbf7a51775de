//! # Builder Messages
//!
//! Requests sent from [`BuilderClient`](super::BuilderClient) to
//! [`BuilderActor`](super::BuilderActor). Each carries a one-shot channel for
//! the reply.

use tokio::sync::oneshot;

use super::BuilderError;
use crate::engine::{MoveIntent, MoveOutcome};
use crate::filter::DisplayModel;
use crate::model::{
    Module, ModuleCreate, ModuleId, ModuleUpdate, Resource, ResourceCreate, ResourceId,
    ResourceUpdate,
};
use crate::store::{CourseSnapshot, DeletePolicy, ModuleRemoval};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, BuilderError>>;

/// The CRUD intents of the entity store, the three move intents, and reads.
#[derive(Debug)]
pub enum BuilderRequest {
    CreateModule {
        params: ModuleCreate,
        respond_to: Response<Module>,
    },
    UpdateModule {
        id: ModuleId,
        update: ModuleUpdate,
        respond_to: Response<Module>,
    },
    /// `policy: None` uses the actor's configured policy.
    DeleteModule {
        id: ModuleId,
        policy: Option<DeletePolicy>,
        respond_to: Response<ModuleRemoval>,
    },
    CreateResource {
        params: ResourceCreate,
        respond_to: Response<Resource>,
    },
    UpdateResource {
        id: ResourceId,
        update: ResourceUpdate,
        respond_to: Response<Resource>,
    },
    DeleteResource {
        id: ResourceId,
        respond_to: Response<Resource>,
    },
    Move {
        intent: MoveIntent,
        respond_to: Response<MoveOutcome>,
    },
    GetModule {
        id: ModuleId,
        respond_to: Response<Option<Module>>,
    },
    GetResource {
        id: ResourceId,
        respond_to: Response<Option<Resource>>,
    },
    Snapshot {
        respond_to: Response<CourseSnapshot>,
    },
    /// Replace the active search query and return the new projection.
    Search {
        query: String,
        respond_to: Response<DisplayModel>,
    },
    /// Project with the active search query.
    View {
        respond_to: Response<DisplayModel>,
    },
    /// Stop the run loop after replying, even if clients are still alive.
    Shutdown { respond_to: Response<()> },
}
