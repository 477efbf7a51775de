//! Course outline: a compact per-module summary shown beside the builder.

use serde::Serialize;

use super::DisplayModel;
use crate::model::ModuleId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub module_id: ModuleId,
    pub name: String,
    pub item_count: usize,
    pub active: bool,
}

impl OutlineEntry {
    /// `None` for empty modules, which show no count.
    pub fn count_label(&self) -> Option<String> {
        (self.item_count > 0).then(|| item_count_label(self.item_count))
    }
}

/// "1 item", "2 items", ...
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Builds the outline from a projection, in display order.
pub fn outline(display: &DisplayModel, active: Option<ModuleId>) -> Vec<OutlineEntry> {
    display
        .modules
        .iter()
        .map(|view| OutlineEntry {
            module_id: view.module.id,
            name: view.module.name.clone(),
            item_count: view.resources.len(),
            active: active == Some(view.module.id),
        })
        .collect()
}
