//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole builder.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown with store sizes
//! - **CRUD**: `info` when applied, `warn` when rejected, `debug` with full payloads
//! - **Moves**: `info` when applied, `debug` with the reason when ignored
//! - **Client calls**: one span per request (`#[instrument]`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show payloads and ignored hover moves
//! RUST_LOG=debug cargo run
//!
//! # Only the store
//! RUST_LOG=course_builder::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a drag that hovers back over its own slot shows up as:
//!
//! ```text
//! DEBUG Move ignored intent=ReorderModules { drag_index: 1, hover_index: 1 } reason=SamePosition
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
