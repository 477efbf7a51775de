//! # Builder Actor
//!
//! The `BuilderActor` owns the one [`CourseStore`] and processes
//! [`BuilderRequest`]s sequentially. It is the single logical thread that all
//! mutations run on: every request observes a fully settled store, and no
//! `Mutex` or `RwLock` is needed because nothing else can reach the store.
//!
//! ## Usage Pattern
//!
//! 1.  **Create**: Call `BuilderActor::new()` to get the `actor` (server) and `client` (interface).
//! 2.  **Wire**: Pass observers into `actor.run(observers)`.
//! 3.  **Run**: Spawn the run loop in a background task.
//!
//! ```rust
//! use course_builder::actor::BuilderActor;
//! use course_builder::model::ModuleCreate;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = BuilderActor::new(16);
//!     tokio::spawn(actor.run(Vec::new()));
//!
//!     let module = client.create_module(ModuleCreate::new("Week 1")).await.unwrap();
//!     assert_eq!(client.module(module.id).await.unwrap(), Some(module));
//! }
//! ```
//!
//! ## Hover traffic
//!
//! Drag gestures can send a burst of [`MoveIntent`](crate::engine::MoveIntent)s.
//! They queue in the channel and are applied one by one against whatever the
//! store holds at that moment, so a stale intent simply becomes a no-op.

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::{BuilderClient, BuilderError, BuilderRequest, Observers, Response, StoreChange};
use crate::filter::{project, DisplayModel};
use crate::store::{CourseStore, DeletePolicy, StoreError};

pub struct BuilderActor {
    receiver: mpsc::Receiver<BuilderRequest>,
    store: CourseStore,
    delete_policy: DeletePolicy,
    query: String,
}

/// Sends a CRUD result back and returns the applied value, if any.
fn reply<T: Clone>(respond_to: Response<T>, result: Result<T, StoreError>) -> Option<T> {
    let applied = result.as_ref().ok().cloned();
    let _ = respond_to.send(result.map_err(BuilderError::from));
    applied
}

impl BuilderActor {
    /// Creates a new `BuilderActor` with an empty store and its associated `BuilderClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. If the channel is
    /// full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, BuilderClient) {
        Self::with_store(buffer_size, CourseStore::new())
    }

    /// Like [`BuilderActor::new`], starting from an existing store.
    pub fn with_store(buffer_size: usize, store: CourseStore) -> (Self, BuilderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            delete_policy: DeletePolicy::default(),
            query: String::new(),
        };
        (actor, BuilderClient::new(sender))
    }

    /// Sets the policy used by delete-module requests that don't name one.
    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    fn view(&self) -> DisplayModel {
        project(self.store.modules(), self.store.resources(), &self.query)
    }

    /// Runs the event loop until every client is dropped or a shutdown request arrives.
    ///
    /// # Context Injection
    /// `observers` are notified after each applied mutation. They are passed here
    /// rather than to `new()` so they can hold clients created after the actor.
    pub async fn run(mut self, observers: Observers) {
        info!(
            modules = self.store.modules().len(),
            resources = self.store.resources().len(),
            observers = observers.len(),
            "Builder started"
        );

        while let Some(msg) = self.receiver.recv().await {
            let change = match msg {
                BuilderRequest::CreateModule { params, respond_to } => {
                    reply(respond_to, self.store.create_module(params))
                        .map(StoreChange::ModuleCreated)
                }
                BuilderRequest::UpdateModule {
                    id,
                    update,
                    respond_to,
                } => reply(respond_to, self.store.update_module(id, update))
                    .map(StoreChange::ModuleUpdated),
                BuilderRequest::DeleteModule {
                    id,
                    policy,
                    respond_to,
                } => {
                    let policy = policy.unwrap_or(self.delete_policy);
                    reply(respond_to, self.store.delete_module_with(id, policy)).map(|removal| {
                        StoreChange::ModuleDeleted {
                            module_id: removal.module.id,
                            removed: removal.removed.iter().map(|r| r.id).collect(),
                            unassigned: removal.unassigned,
                        }
                    })
                }
                BuilderRequest::CreateResource { params, respond_to } => {
                    reply(respond_to, self.store.create_resource(params))
                        .map(StoreChange::ResourceCreated)
                }
                BuilderRequest::UpdateResource {
                    id,
                    update,
                    respond_to,
                } => reply(respond_to, self.store.update_resource(id, update))
                    .map(StoreChange::ResourceUpdated),
                BuilderRequest::DeleteResource { id, respond_to } => {
                    reply(respond_to, self.store.delete_resource(id))
                        .map(|r| StoreChange::ResourceDeleted(r.id))
                }
                BuilderRequest::Move { intent, respond_to } => {
                    let outcome = self.store.apply_move(intent);
                    let _ = respond_to.send(Ok(outcome));
                    outcome
                        .is_applied()
                        .then_some(StoreChange::Moved { intent, outcome })
                }
                BuilderRequest::GetModule { id, respond_to } => {
                    let module = self.store.module(id).cloned();
                    debug!(module_id = %id, found = module.is_some(), "Get module");
                    let _ = respond_to.send(Ok(module));
                    None
                }
                BuilderRequest::GetResource { id, respond_to } => {
                    let resource = self.store.resource(id).cloned();
                    debug!(resource_id = %id, found = resource.is_some(), "Get resource");
                    let _ = respond_to.send(Ok(resource));
                    None
                }
                BuilderRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.snapshot()));
                    None
                }
                BuilderRequest::Search { query, respond_to } => {
                    self.query = query;
                    let view = self.view();
                    debug!(
                        query = %view.query,
                        modules = view.modules.len(),
                        unassigned = view.unassigned.len(),
                        "Search"
                    );
                    let _ = respond_to.send(Ok(view));
                    None
                }
                BuilderRequest::View { respond_to } => {
                    let _ = respond_to.send(Ok(self.view()));
                    None
                }
                BuilderRequest::Shutdown { respond_to } => {
                    let _ = respond_to.send(Ok(()));
                    break;
                }
            };

            if let Some(change) = change {
                for observer in &observers {
                    observer.on_change(&change, &self.store).await;
                }
            }
        }

        info!(
            modules = self.store.modules().len(),
            resources = self.store.resources().len(),
            "Shutdown"
        );
    }
}
