//! # Filter Projector
//!
//! Derives what to display for a search query without touching the store.
//!
//! Matching is a case-insensitive substring test. Modules use a two-tier rule:
//!
//! 1. the module **name** matches: show the module with *all* its resources;
//! 2. otherwise, some resource **titles** match: show the module with *only*
//!    those resources;
//! 3. otherwise the module is hidden.
//!
//! Unassigned resources are shown iff their title matches. An empty query
//! shows everything.

pub mod outline;

pub use outline::*;

use serde::Serialize;
use std::collections::HashMap;

use crate::model::{Module, ModuleId, Resource};

/// A visible module with the resources to render under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleView {
    pub module: Module,
    pub resources: Vec<Resource>,
}

impl ModuleView {
    /// Line shown under the module name.
    pub fn subtitle(&self) -> String {
        if self.resources.is_empty() {
            "Add items to this module".to_string()
        } else {
            item_count_label(self.resources.len())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayModel {
    /// The normalized query this model was projected with.
    pub query: String,
    pub modules: Vec<ModuleView>,
    pub unassigned: Vec<Resource>,
}

impl DisplayModel {
    /// True when the query hid everything (or there is nothing to show).
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.unassigned.is_empty()
    }

    pub fn module(&self, id: ModuleId) -> Option<&ModuleView> {
        self.modules.iter().find(|view| view.module.id == id)
    }
}

/// Trims and lower-cases a search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches(text: &str, needle: &str) -> bool {
    needle.is_empty() || text.to_lowercase().contains(needle)
}

/// Projects the sequences through `query`. Pure; the inputs are only read.
pub fn project(modules: &[Module], resources: &[Resource], query: &str) -> DisplayModel {
    let needle = normalize_query(query);

    let mut unassigned = Vec::new();
    let mut by_module: HashMap<ModuleId, Vec<&Resource>> = HashMap::new();
    for resource in resources {
        match resource.module_id {
            Some(module_id) => by_module.entry(module_id).or_default().push(resource),
            None if matches(&resource.title, &needle) => unassigned.push(resource.clone()),
            None => {}
        }
    }

    let modules = modules
        .iter()
        .filter_map(|module| {
            let owned = by_module.get(&module.id).map(Vec::as_slice).unwrap_or(&[]);
            let resources: Vec<Resource> = if matches(&module.name, &needle) {
                owned.iter().map(|r| (*r).clone()).collect()
            } else {
                let hits: Vec<Resource> = owned
                    .iter()
                    .filter(|r| matches(&r.title, &needle))
                    .map(|r| (*r).clone())
                    .collect();
                if hits.is_empty() {
                    return None;
                }
                hits
            };
            Some(ModuleView {
                module: module.clone(),
                resources,
            })
        })
        .collect();

    DisplayModel {
        query: needle,
        modules,
        unassigned,
    }
}
