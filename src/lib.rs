//! # Course Builder
//!
//! > **Organize learning content into modules, then drag it into shape.**
//!
//! An author keeps an ordered list of **modules**, each holding an ordered list
//! of **resources** (links or files), plus a pool of **unassigned** resources.
//! Everything can be reordered and reassigned by drag gestures or the
//! equivalent calls, and a search query narrows what is shown without
//! touching the underlying data.
//!
//! ## 🏗️ Design
//!
//! ### One store, one thread
//! The [`CourseStore`](store::CourseStore) holds both sequences and enforces
//! the invariants: unique ids, no dangling module references, and moves that
//! never duplicate or lose a resource. A single
//! [`BuilderActor`](actor::BuilderActor) owns the store and applies requests
//! one at a time, so each request sees a fully settled state and no locks are
//! needed.
//!
//! ### Moves are best-effort
//! Hover callbacks fire constantly during a drag and may refer to items that
//! have just moved or been deleted. The [move engine](engine) therefore never
//! fails: a stale intent is reported as
//! [`MoveOutcome::Unchanged`](engine::MoveOutcome::Unchanged) and leaves the
//! store alone. CRUD calls, by contrast, return real errors.
//!
//! ### Search is a projection
//! [`filter::project`] is a pure function from the store's sequences and a
//! query to a [`DisplayModel`](filter::DisplayModel). A module whose *name*
//! matches is shown with all its resources; otherwise it is shown with only
//! its matching resources, or hidden.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `Module`, `Resource` and their create/update payloads.
//! - [`store`]: the entity store and its ordered sequences.
//! - [`engine`]: move intents and the reorder/reassign rules.
//! - [`filter`]: the search projection and the course outline.
//! - [`actor`]: the builder actor, its client, change observers, and a mock.
//! - [`gesture`]: turning drag notifications into move intents.
//! - [`forms`]: create/edit form validation and guarded submission.
//! - [`lifecycle`]: configuration, tracing, start-up and shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use course_builder::lifecycle::CourseSystem;
//! use course_builder::model::{ModuleCreate, ResourceCreate};
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = CourseSystem::new();
//!     let client = &system.client;
//!
//!     let intro = client.create_module(ModuleCreate::new("Intro")).await.unwrap();
//!     let link = ResourceCreate::link("Syllabus", "https://example.com/syllabus", Some(intro.id));
//!     client.create_resource(link).await.unwrap();
//!
//!     let view = client.search("syll").await.unwrap();
//!     assert_eq!(view.modules[0].resources[0].title, "Syllabus");
//!
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod actor;
pub mod engine;
pub mod filter;
pub mod forms;
pub mod gesture;
pub mod lifecycle;
pub mod model;
pub mod store;
