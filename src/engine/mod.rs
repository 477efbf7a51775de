//! # Move Engine
//!
//! The reorder-and-reassign rules. Each function takes the sequences it needs
//! from the [`CourseStore`](crate::store::CourseStore), which is the only caller,
//! and reports a [`MoveOutcome`].
//!
//! Hover callbacks fire these at high frequency with arguments that may already
//! be stale, so every function is total: an unresolved id or an index outside
//! the sequence yields [`MoveOutcome::Unchanged`] instead of an error. Indices
//! are always looked up against the current sequence, never cached.
//!
//! ## Resource moves
//!
//! | dragged vs. target container | effect |
//! |---|---|
//! | same (both unassigned counts) | splice the dragged resource in front of the target |
//! | different | rewrite `module_id` only; global position is kept |

pub mod intent;

pub use intent::*;

use crate::model::{Module, ModuleId, Resource, ResourceId};
use crate::store::OrderedSequence;

/// Removes the module at `drag_index` and reinserts it at `hover_index`.
///
/// A `hover_index` past the end is clamped to the last position.
pub(crate) fn reorder_modules(
    modules: &mut OrderedSequence<Module>,
    drag_index: usize,
    hover_index: usize,
) -> MoveOutcome {
    let len = modules.len();
    if drag_index >= len {
        return MoveOutcome::Unchanged(NoOpReason::IndexOutOfRange {
            index: drag_index,
            len,
        });
    }
    let hover_index = hover_index.min(len - 1);
    if drag_index == hover_index {
        return MoveOutcome::Unchanged(NoOpReason::SamePosition);
    }
    modules.move_index(drag_index, hover_index);
    MoveOutcome::Reordered
}

/// Reorders `dragged` in front of `target` when they share a container,
/// otherwise moves `dragged` into the target's container.
pub(crate) fn move_resource(
    resources: &mut OrderedSequence<Resource>,
    dragged: ResourceId,
    target: ResourceId,
) -> MoveOutcome {
    if dragged == target {
        return MoveOutcome::Unchanged(NoOpReason::SelfTarget);
    }
    let Some(from) = resources.position(&dragged) else {
        return MoveOutcome::Unchanged(NoOpReason::UnknownResource(dragged));
    };
    let Some(target_container) = resources.get(&target).map(|r| r.module_id) else {
        return MoveOutcome::Unchanged(NoOpReason::UnknownResource(target));
    };
    let dragged_container = resources.as_slice()[from].module_id;

    if dragged_container != target_container {
        if let Some(resource) = resources.get_mut(&dragged) {
            resource.module_id = target_container;
        }
        return MoveOutcome::Reassigned {
            resource: dragged,
            from: dragged_container,
            to: target_container,
        };
    }

    let Some(item) = resources.remove(&dragged) else {
        return MoveOutcome::Unchanged(NoOpReason::UnknownResource(dragged));
    };
    // The target shifted left if the dragged item sat before it.
    let at = resources.position(&target).unwrap_or(from);
    resources.insert(at, item);
    if at == from {
        MoveOutcome::Unchanged(NoOpReason::SamePosition)
    } else {
        MoveOutcome::Reordered
    }
}

/// Moves a resource into a module (`Some`) or the unassigned pool (`None`).
pub(crate) fn drop_resource(
    modules: &OrderedSequence<Module>,
    resources: &mut OrderedSequence<Resource>,
    resource_id: ResourceId,
    target: Option<ModuleId>,
) -> MoveOutcome {
    if let Some(module_id) = target {
        if !modules.contains(&module_id) {
            return MoveOutcome::Unchanged(NoOpReason::UnknownModule(module_id));
        }
    }
    let Some(resource) = resources.get_mut(&resource_id) else {
        return MoveOutcome::Unchanged(NoOpReason::UnknownResource(resource_id));
    };
    if resource.module_id == target {
        return MoveOutcome::Unchanged(NoOpReason::SameContainer);
    }
    let from = resource.module_id;
    resource.module_id = target;
    MoveOutcome::Reassigned {
        resource: resource_id,
        from,
        to: target,
    }
}
