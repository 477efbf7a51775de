use crate::model::{
    validate_title, ContentHandle, FileUpload, MediaType, ModuleId, PayloadCreate, Resource,
    ResourceCreate, ResourceId, ResourceKind, ResourceUpdate,
};
use crate::store::ValidationError;

use super::ResourceSubmission;

/// Upload a file into a container, or edit an existing file resource.
///
/// When editing, the previous file stays attached unless a new one is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub title: String,
    module_id: Option<ModuleId>,
    editing: Option<ResourceId>,
    existing: Option<FileUpload>,
    selected: Option<FileUpload>,
}

impl UploadForm {
    pub fn new(module_id: Option<ModuleId>) -> Self {
        Self {
            module_id,
            ..Self::default()
        }
    }

    /// Prefills the form from an existing file, assigned or not.
    ///
    /// No file is pre-selected; the current one is kept as the fallback.
    pub fn edit(resource: &Resource) -> Result<Self, ValidationError> {
        let existing = resource.file().ok_or(ValidationError::KindMismatch {
            kind: ResourceKind::Link,
            field: "file",
        })?;
        Ok(Self {
            title: resource.title.clone(),
            module_id: resource.module_id,
            editing: Some(resource.id),
            existing: Some(existing.clone()),
            selected: None,
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
            "Edit File"
        } else {
            "Upload File"
        }
    }

    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (submitting, self.editing.is_some()) {
            (true, _) => "Saving...",
            (false, true) => "Save Changes",
            (false, false) => "Upload",
        }
    }

    /// Selects a file. A disallowed media type is rejected and the previous
    /// selection is kept.
    pub fn select_file(
        &mut self,
        file_name: impl Into<String>,
        file_size_bytes: u64,
        mime: &str,
        content: ContentHandle,
    ) -> Result<(), ValidationError> {
        let media_type: MediaType = mime.parse()?;
        self.selected = Some(FileUpload::new(file_name, file_size_bytes, media_type, content));
        Ok(())
    }

    /// The file that would be attached on submit.
    pub fn displayed_file(&self) -> Option<&FileUpload> {
        self.selected.as_ref().or(self.existing.as_ref())
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && self.displayed_file().is_some()
    }

    pub fn validate(&self) -> Result<ResourceSubmission, ValidationError> {
        let title = validate_title(&self.title)?;
        match self.editing {
            Some(id) => Ok(ResourceSubmission::Update {
                id,
                update: ResourceUpdate {
                    title: Some(title),
                    url: None,
                    file: self.selected.clone(),
                },
            }),
            None => {
                let upload = self.selected.clone().ok_or(ValidationError::MissingFile)?;
                Ok(ResourceSubmission::Create(ResourceCreate {
                    title,
                    module_id: self.module_id,
                    payload: PayloadCreate::File(Some(upload)),
                }))
            }
        }
    }
}
