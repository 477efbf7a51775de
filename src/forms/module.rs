use crate::model::{Module, ModuleCreate, ModuleId, ModuleUpdate};
use crate::store::ValidationError;

use super::ModuleSubmission;

/// Create or rename a module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleForm {
    pub name: String,
    editing: Option<ModuleId>,
}

impl ModuleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills the form for renaming `module`.
    pub fn edit(module: &Module) -> Self {
        Self {
            name: module.name.clone(),
            editing: Some(module.id),
        }
    }

    pub fn editing(&self) -> Option<ModuleId> {
        self.editing
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn validate(&self) -> Result<ModuleSubmission, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyModuleName);
        }
        let name = name.to_string();
        Ok(match self.editing {
            Some(id) => ModuleSubmission::Update {
                id,
                update: ModuleUpdate { name },
            },
            None => ModuleSubmission::Create(ModuleCreate { name }),
        })
    }
}
