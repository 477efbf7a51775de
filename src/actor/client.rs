//! # Builder Client
//!
//! `BuilderClient` is the type-safe, async API to a running
//! [`BuilderActor`](super::BuilderActor). It holds only a channel sender, so it is
//! cheap to clone and share between the presentation layer, the gesture adapter
//! and form submitters.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::{BuilderError, BuilderRequest, Response};
use crate::engine::{MoveIntent, MoveOutcome};
use crate::filter::{outline, DisplayModel, OutlineEntry};
use crate::model::{
    Module, ModuleCreate, ModuleId, ModuleUpdate, Resource, ResourceCreate, ResourceId,
    ResourceUpdate,
};
use crate::store::{CourseSnapshot, DeletePolicy, ModuleRemoval};

#[derive(Clone)]
pub struct BuilderClient {
    sender: mpsc::Sender<BuilderRequest>,
}

impl BuilderClient {
    pub fn new(sender: mpsc::Sender<BuilderRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> BuilderRequest,
    ) -> Result<T, BuilderError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| BuilderError::ActorClosed)?;
        response.await.map_err(|_| BuilderError::ActorDropped)?
    }

    // --- Modules ---

    #[instrument(skip(self))]
    pub async fn create_module(&self, params: ModuleCreate) -> Result<Module, BuilderError> {
        debug!("Sending request");
        self.request(|respond_to| BuilderRequest::CreateModule { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn rename_module(&self, id: ModuleId, name: String) -> Result<Module, BuilderError> {
        debug!("Sending request");
        let update = ModuleUpdate { name };
        self.request(|respond_to| BuilderRequest::UpdateModule {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Deletes a module using the actor's configured [`DeletePolicy`].
    #[instrument(skip(self))]
    pub async fn delete_module(&self, id: ModuleId) -> Result<ModuleRemoval, BuilderError> {
        debug!("Sending request");
        self.request(|respond_to| BuilderRequest::DeleteModule {
            id,
            policy: None,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_module_with(
        &self,
        id: ModuleId,
        policy: DeletePolicy,
    ) -> Result<ModuleRemoval, BuilderError> {
        debug!("Sending request");
        self.request(|respond_to| BuilderRequest::DeleteModule {
            id,
            policy: Some(policy),
            respond_to,
        })
        .await
    }

    pub async fn module(&self, id: ModuleId) -> Result<Option<Module>, BuilderError> {
        self.request(|respond_to| BuilderRequest::GetModule { id, respond_to })
            .await
    }

    // --- Resources ---

    #[instrument(skip(self))]
    pub async fn create_resource(&self, params: ResourceCreate) -> Result<Resource, BuilderError> {
        debug!("Sending request");
        self.request(|respond_to| BuilderRequest::CreateResource { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_resource(
        &self,
        id: ResourceId,
        update: ResourceUpdate,
    ) -> Result<Resource, BuilderError> {
        debug!("Sending request");
        self.request(|respond_to| BuilderRequest::UpdateResource {
            id,
            update,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_resource(&self, id: ResourceId) -> Result<Resource, BuilderError> {
        debug!("Sending request");
        self.request(|respond_to| BuilderRequest::DeleteResource { id, respond_to })
            .await
    }

    pub async fn resource(&self, id: ResourceId) -> Result<Option<Resource>, BuilderError> {
        self.request(|respond_to| BuilderRequest::GetResource { id, respond_to })
            .await
    }

    // --- Moves ---

    pub async fn apply_move(&self, intent: MoveIntent) -> Result<MoveOutcome, BuilderError> {
        self.request(|respond_to| BuilderRequest::Move { intent, respond_to })
            .await
    }

    pub async fn reorder_modules(
        &self,
        drag_index: usize,
        hover_index: usize,
    ) -> Result<MoveOutcome, BuilderError> {
        self.apply_move(MoveIntent::ReorderModules {
            drag_index,
            hover_index,
        })
        .await
    }

    pub async fn move_resource(
        &self,
        dragged: ResourceId,
        target: ResourceId,
    ) -> Result<MoveOutcome, BuilderError> {
        self.apply_move(MoveIntent::MoveResource { dragged, target })
            .await
    }

    pub async fn drop_resource(
        &self,
        resource: ResourceId,
        target: Option<ModuleId>,
    ) -> Result<MoveOutcome, BuilderError> {
        self.apply_move(MoveIntent::DropResource { resource, target })
            .await
    }

    // --- Reads ---

    pub async fn snapshot(&self) -> Result<CourseSnapshot, BuilderError> {
        self.request(|respond_to| BuilderRequest::Snapshot { respond_to })
            .await
    }

    /// Sets the active search query and returns the matching projection.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<DisplayModel, BuilderError> {
        let query = query.to_string();
        self.request(|respond_to| BuilderRequest::Search { query, respond_to })
            .await
    }

    /// The projection for the active search query.
    pub async fn view(&self) -> Result<DisplayModel, BuilderError> {
        self.request(|respond_to| BuilderRequest::View { respond_to })
            .await
    }

    pub async fn outline(&self, active: Option<ModuleId>) -> Result<Vec<OutlineEntry>, BuilderError> {
        let view = self.view().await?;
        Ok(outline(&view, active))
    }

    /// Asks the actor to stop after the requests already queued ahead of this one.
    pub async fn shutdown(&self) -> Result<(), BuilderError> {
        self.request(|respond_to| BuilderRequest::Shutdown { respond_to })
            .await
    }
}
