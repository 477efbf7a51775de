//! Move intents and their outcomes.

use crate::model::{ModuleId, ResourceId};

/// A request to reorder or reassign a module or resource.
///
/// Emitted by the [gesture adapter](crate::gesture) or built directly by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    /// Move the module at `drag_index` to `hover_index`.
    ReorderModules { drag_index: usize, hover_index: usize },
    /// Drag one resource over another: reorder within a container, or
    /// reassign to the target's container.
    MoveResource {
        dragged: ResourceId,
        target: ResourceId,
    },
    /// Drop a resource onto a module body (`Some`) or the unassigned pool (`None`).
    DropResource {
        resource: ResourceId,
        target: Option<ModuleId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// An item changed position inside its sequence or container.
    Reordered,
    /// A resource changed container; its global position is unchanged.
    Reassigned {
        resource: ResourceId,
        from: Option<ModuleId>,
        to: Option<ModuleId>,
    },
    /// Nothing changed.
    Unchanged(NoOpReason),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Unchanged(_))
    }
}

/// Why a move left the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Source and target are the same item.
    SelfTarget,
    /// The item would land where it already is.
    SamePosition,
    /// The resource is already in the target container.
    SameContainer,
    IndexOutOfRange { index: usize, len: usize },
    UnknownResource(ResourceId),
    UnknownModule(ModuleId),
}
