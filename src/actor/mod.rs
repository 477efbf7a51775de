//! # Builder Runtime
//!
//! The store is mutated on one logical thread: a Tokio task running
//! [`BuilderActor`]. Everything else talks to it through a [`BuilderClient`].
//!
//! ## Key Types
//!
//! - [`BuilderActor`]: owns the [`CourseStore`](crate::store::CourseStore) and the active search query.
//! - [`BuilderClient`]: cloneable async handle used by the presentation layer and gesture adapter.
//! - [`ChangeObserver`]: hook injected at `run()` time, called after each applied mutation.
//! - [`BuilderError`]: channel failures plus passthrough store errors.
//! - [`mock::MockBuilder`]: scripted stand-in for the actor, for testing client-side logic.

pub mod builder;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod observer;

pub use builder::BuilderActor;
pub use client::BuilderClient;
pub use error::BuilderError;
pub use message::{BuilderRequest, Response};
pub use observer::{ChangeObserver, Observers, StoreChange};
