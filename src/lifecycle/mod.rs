//! # System Lifecycle
//!
//! Wiring for a running builder: configuration, logging, and the
//! [`CourseSystem`] that spawns the actor and shuts it down.
//!
//! ## Dependency Injection via Context
//!
//! Observers are handed to the actor when it starts running, not when it is
//! constructed, so an observer may hold a client that was created alongside
//! the actor:
//!
//! ```rust,ignore
//! let (actor, client) = BuilderActor::new(32);
//! let renderer = Arc::new(Renderer::new(client.clone()));
//! tokio::spawn(actor.run(vec![renderer]));
//! ```
//!
//! ## Graceful Shutdown
//!
//! [`CourseSystem::shutdown`] sends an explicit shutdown request instead of
//! relying on every client being dropped, because submitters and observers
//! keep clones alive. Requests queued before it are still answered.

pub mod config;
pub mod course_system;
pub mod tracing;

pub use config::*;
pub use course_system::*;
pub use self::tracing::*;
