//! Wire-shaped models mirrored from the backend.
//!
//! Field shapes match what the backend serializes over the bridge; the
//! catalog stores these objects verbatim and the gateway round-trips them.

use crate::error::UiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One cataloged item. `hash` is the content-derived identity and is unique
/// within the catalog; `timestamp_modified` is stamped on every local edit
/// before the entry is pushed back to the backend.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Metadata {
    pub hash: String,
    pub name: String,
    pub path: String,
    pub content_type: ContentType,
    pub status: Status,
    pub timestamp_created: i64,
    pub timestamp_modified: i64,
    pub extension: Option<String>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
}

impl Metadata {
    /// Tags as a slice regardless of the backend's `null`/empty encoding.
    pub fn tag_slice(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    Image,
    Audio,
    Video,
    Gif,
    Link,
    Other,
}

impl ContentType {
    /// Every known content type, in the order the type filter defaults to.
    pub const ALL: [ContentType; 6] = [
        ContentType::Image,
        ContentType::Gif,
        ContentType::Video,
        ContentType::Audio,
        ContentType::Link,
        ContentType::Other,
    ];
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Other
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Image => "Image",
            ContentType::Audio => "Audio",
            ContentType::Video => "Video",
            ContentType::Gif => "Gif",
            ContentType::Link => "Link",
            ContentType::Other => "Other",
        };
        f.write_str(name)
    }
}

impl FromStr for ContentType {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Image" => Ok(ContentType::Image),
            "Audio" => Ok(ContentType::Audio),
            "Video" => Ok(ContentType::Video),
            "Gif" => Ok(ContentType::Gif),
            "Link" => Ok(ContentType::Link),
            "Other" => Ok(ContentType::Other),
            other => Err(UiError::Metadata(format!(
                "Unknown content type: {other}"
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Valid,
    Deleted,
    Duplicate,
}

impl Default for Status {
    fn default() -> Self {
        Status::Valid
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Valid => "Valid",
            Status::Deleted => "Deleted",
            Status::Duplicate => "Duplicate",
        };
        f.write_str(name)
    }
}

impl FromStr for Status {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(Status::Valid),
            "Deleted" => Ok(Status::Deleted),
            "Duplicate" => Ok(Status::Duplicate),
            other => Err(UiError::Metadata(format!("Unknown status: {other}"))),
        }
    }
}

/// Transient classification of a candidate tag during tag entry.
/// Never persisted; derived fresh on every keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagMode {
    New,
    Suggested,
    Existing,
    None,
}

impl TagMode {
    /// Classify `candidate` against the global tag vocabulary: an exact match
    /// is `Existing`, a prefix of a known tag is `Suggested`, anything else
    /// non-empty is `New`.
    pub fn classify(candidate: &str, vocabulary: &[String]) -> TagMode {
        if candidate.is_empty() {
            return TagMode::None;
        }
        if vocabulary.iter().any(|t| t == candidate) {
            return TagMode::Existing;
        }
        if vocabulary.iter().any(|t| t.starts_with(candidate)) {
            return TagMode::Suggested;
        }
        TagMode::New
    }
}

/// Backend-defined saved view. The folder list is replaced wholesale on each
/// refresh; entries carry no identity across refreshes.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct SmartFolder {
    pub name: String,
    pub path: String,
    pub number_of_files: i32,
}

/// Backend-owned settings object, opaque beyond round-tripping it through
/// the get/update preference calls.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Preferences {
    pub recent_searches: Vec<String>,
    pub show_file_extensions: bool,
}
