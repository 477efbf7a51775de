use crate::model::{
    parse_url, validate_title, ModuleId, Resource, ResourceCreate, ResourceId, ResourceKind,
    ResourceUpdate,
};
use crate::store::ValidationError;

use super::ResourceSubmission;

/// Add a link to a container, or edit an existing link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkForm {
    pub title: String,
    pub url: String,
    module_id: Option<ModuleId>,
    editing: Option<ResourceId>,
}

impl LinkForm {
    /// A blank form adding to `module_id` (`None` = unassigned).
    pub fn new(module_id: Option<ModuleId>) -> Self {
        Self {
            module_id,
            ..Self::default()
        }
    }

    /// Prefills the form from an existing link, assigned or not.
    pub fn edit(resource: &Resource) -> Result<Self, ValidationError> {
        let url = resource.url().ok_or(ValidationError::KindMismatch {
            kind: ResourceKind::File,
            field: "url",
        })?;
        Ok(Self {
            title: resource.title.clone(),
            url: url.to_string(),
            module_id: resource.module_id,
            editing: Some(resource.id),
        })
    }

    pub fn module_id(&self) -> Option<ModuleId> {
        self.module_id
    }

    pub fn editing(&self) -> Option<ResourceId> {
        self.editing
    }

    pub fn heading(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Link"
        } else {
            "Add a Link"
        }
    }

    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (submitting, self.editing.is_some()) {
            (true, _) => "Saving...",
            (false, true) => "Save Changes",
            (false, false) => "Add Link",
        }
    }

    /// Mirrors the disabled state of the submit button.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }

    pub fn validate(&self) -> Result<ResourceSubmission, ValidationError> {
        let title = validate_title(&self.title)?;
        let url = parse_url(&self.url)?.to_string();
        Ok(match self.editing {
            Some(id) => ResourceSubmission::Update {
                id,
                update: ResourceUpdate {
                    title: Some(title),
                    url: Some(url),
                    file: None,
                },
            },
            None => ResourceSubmission::Create(ResourceCreate::link(title, url, self.module_id)),
        })
    }
}
