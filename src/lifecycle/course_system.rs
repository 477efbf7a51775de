use tracing::{error, info};

use super::BuilderConfig;
use crate::actor::{BuilderActor, BuilderClient, BuilderError, Observers};
use crate::forms::Submitter;

/// Starts and stops the builder actor.
///
/// # Example
///
/// ```ignore
/// let system = CourseSystem::start(&BuilderConfig::load()?, Vec::new());
///
/// let module = system.client.create_module(ModuleCreate::new("Week 1")).await?;
/// system.client.search("week").await?;
///
/// system.shutdown().await?;
/// ```
pub struct CourseSystem {
    /// Client for interacting with the builder actor
    pub client: BuilderClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl Default for CourseSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseSystem {
    /// Starts a builder with the default configuration and no observers.
    pub fn new() -> Self {
        Self::start(&BuilderConfig::default(), Vec::new())
    }

    /// Spawns the builder actor with `observers` injected.
    pub fn start(config: &BuilderConfig, observers: Observers) -> Self {
        let (actor, client) = BuilderActor::new(config.channel_capacity);
        let actor = actor.with_delete_policy(config.delete_policy);
        let handle = tokio::spawn(actor.run(observers));
        info!(?config, "Course system started");
        Self { client, handle }
    }

    /// A submitter for one form. Each open form should get its own.
    pub fn submitter(&self) -> Submitter {
        Submitter::new(self.client.clone())
    }

    /// Stops the actor and waits for it to finish.
    ///
    /// Requests queued before the shutdown are still processed. Client clones
    /// held elsewhere get [`BuilderError::ActorClosed`] afterwards.
    pub async fn shutdown(self) -> Result<(), BuilderError> {
        info!("Shutting down course system...");
        self.client.shutdown().await?;
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Builder task failed: {:?}", e);
            return Err(BuilderError::ActorFailed(e.to_string()));
        }

        info!("Course system shutdown complete.");
        Ok(())
    }
}
