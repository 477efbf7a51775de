//! Link and file resources, plus the payload validation rules shared by the
//! store and the forms.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use url::Url;

use super::ModuleId;
use crate::store::ValidationError;

/// Shortest accepted resource title, in characters, after trimming.
pub const TITLE_MIN_CHARS: usize = 2;
/// Longest accepted resource title, in characters, after trimming.
pub const TITLE_MAX_CHARS: usize = 100;

/// Type-safe identifier for Resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u32);

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Link,
    File,
}

/// The file formats an upload may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Pdf,
    Jpeg,
    Png,
}

impl MediaType {
    /// The MIME type reported by browsers and upload pipelines.
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }
}

impl FromStr for MediaType {
    type Err = ValidationError;

    /// Accepts either a MIME type or a bare format name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "application/pdf" | "pdf" => Ok(MediaType::Pdf),
            "image/jpeg" | "jpeg" | "jpg" => Ok(MediaType::Jpeg),
            "image/png" | "png" => Ok(MediaType::Png),
            _ => Err(ValidationError::UnsupportedMediaType(s.to_string())),
        }
    }
}

/// Opaque reference to uploaded binary content. The store never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHandle(pub String);

/// A selected file together with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    pub file_name: String,
    pub file_size_bytes: u64,
    pub media_type: MediaType,
    pub content: ContentHandle,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        file_size_bytes: u64,
        media_type: MediaType,
        content: ContentHandle,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_size_bytes,
            media_type,
            content,
        }
    }

    /// Size rounded to the nearest KiB, as shown next to the file name.
    pub fn size_kb(&self) -> u64 {
        self.file_size_bytes.saturating_add(512) / 1024
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourcePayload {
    Link { url: Url },
    File(FileUpload),
}

/// A link or file, optionally owned by a module.
///
/// `module_id == None` places the resource in the unassigned pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub module_id: Option<ModuleId>,
    pub payload: ResourcePayload,
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self.payload {
            ResourcePayload::Link { .. } => ResourceKind::Link,
            ResourcePayload::File(_) => ResourceKind::File,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.module_id.is_none()
    }

    pub fn url(&self) -> Option<&Url> {
        match &self.payload {
            ResourcePayload::Link { url } => Some(url),
            ResourcePayload::File(_) => None,
        }
    }

    pub fn file(&self) -> Option<&FileUpload> {
        match &self.payload {
            ResourcePayload::File(upload) => Some(upload),
            ResourcePayload::Link { .. } => None,
        }
    }
}

/// Kind-specific data supplied at creation time.
#[derive(Debug, Clone)]
pub enum PayloadCreate {
    Link { url: String },
    /// `None` when no file was selected; rejected by validation.
    File(Option<FileUpload>),
}

/// Payload for creating a new resource.
#[derive(Debug, Clone)]
pub struct ResourceCreate {
    pub title: String,
    pub module_id: Option<ModuleId>,
    pub payload: PayloadCreate,
}

impl ResourceCreate {
    pub fn link(
        title: impl Into<String>,
        url: impl Into<String>,
        module_id: Option<ModuleId>,
    ) -> Self {
        Self {
            title: title.into(),
            module_id,
            payload: PayloadCreate::Link { url: url.into() },
        }
    }

    pub fn file(title: impl Into<String>, upload: FileUpload, module_id: Option<ModuleId>) -> Self {
        Self {
            title: title.into(),
            module_id,
            payload: PayloadCreate::File(Some(upload)),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self.payload {
            PayloadCreate::Link { .. } => ResourceKind::Link,
            PayloadCreate::File(_) => ResourceKind::File,
        }
    }
}

/// Payload for editing an existing resource.
///
/// Fields left as `None` keep their current value, so a file edit without a
/// new selection preserves the previous binary and its metadata.
#[derive(Debug, Clone, Default)]
pub struct ResourceUpdate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub file: Option<FileUpload>,
}

/// Trims a title and checks its length.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    let len = title.chars().count();
    if len == 0 {
        return Err(ValidationError::MissingTitle);
    }
    if len < TITLE_MIN_CHARS {
        return Err(ValidationError::TitleTooShort { len });
    }
    if len > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong { len });
    }
    Ok(title.to_string())
}

/// Parses an absolute URL. Relative references are rejected by the parser.
pub fn parse_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })
}
