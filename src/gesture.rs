//! # Gesture Adapter Contract
//!
//! Turns drag notifications into [`MoveIntent`]s. The pointer layer reports
//! "X is being dragged over Y" and "X was dropped on Y"; these types decide
//! whether that amounts to an intent. Highlighting state stays with the caller.
//!
//! Module drags are hover-driven: each hover over another module reorders
//! immediately, and the drag's own index follows the module to its new place.
//! Indices are positions in the store's module sequence (as in a
//! [`CourseSnapshot`](crate::store::CourseSnapshot)), not in a filtered
//! display, which can hide modules while a search is active.
//!
//! ```rust
//! use course_builder::engine::MoveIntent;
//! use course_builder::gesture::ModuleDrag;
//! use course_builder::model::ModuleId;
//!
//! let mut drag = ModuleDrag::start(ModuleId(1), 0);
//! assert_eq!(
//!     drag.hover(ModuleId(2), 1, 3),
//!     Some(MoveIntent::ReorderModules { drag_index: 0, hover_index: 1 })
//! );
//! // The dragged module now sits at index 1.
//! assert_eq!(drag.index(), 1);
//! ```

use crate::engine::MoveIntent;
use crate::model::{ModuleId, Resource, ResourceId};

/// An in-progress module drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDrag {
    module_id: ModuleId,
    index: usize,
}

impl ModuleDrag {
    pub fn start(module_id: ModuleId, index: usize) -> Self {
        Self { module_id, index }
    }

    pub fn module_id(&self) -> ModuleId {
        self.module_id
    }

    /// Store position the dragged module currently sits at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The dragged module is over module `over`, at store position `over_index`
    /// of `module_count` modules.
    ///
    /// `over_index` is clamped to the last position, matching the engine, so
    /// the tracked index never points past the end.
    pub fn hover(
        &mut self,
        over: ModuleId,
        over_index: usize,
        module_count: usize,
    ) -> Option<MoveIntent> {
        if over == self.module_id || module_count == 0 {
            return None;
        }
        let hover_index = over_index.min(module_count - 1);
        if hover_index == self.index {
            return None;
        }
        let intent = MoveIntent::ReorderModules {
            drag_index: self.index,
            hover_index,
        };
        self.index = hover_index;
        Some(intent)
    }
}

/// An in-progress resource drag.
///
/// Hovers may move the resource into another container while the drag is
/// still going, so no container is cached here. Whether a drop changes
/// anything is decided by the store at the time it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDrag {
    resource_id: ResourceId,
}

impl ResourceDrag {
    pub fn start(resource: &Resource) -> Self {
        Self {
            resource_id: resource.id,
        }
    }

    pub fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    /// The dragged resource is over another resource card.
    pub fn hover(&self, over: ResourceId) -> Option<MoveIntent> {
        (over != self.resource_id).then_some(MoveIntent::MoveResource {
            dragged: self.resource_id,
            target: over,
        })
    }

    /// The resource was dropped on a module body (`Some`) or the unassigned pool (`None`).
    ///
    /// A drop into the container the resource is already in comes back from
    /// the store as [`NoOpReason::SameContainer`](crate::engine::NoOpReason::SameContainer).
    pub fn drop_on(&self, container: Option<ModuleId>) -> MoveIntent {
        MoveIntent::DropResource {
            resource: self.resource_id,
            target: container,
        }
    }
}
