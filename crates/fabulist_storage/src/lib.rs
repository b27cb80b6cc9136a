//! Content-addressable storage for generated story media.
//!
//! Narration audio comes back from the speech provider as raw bytes. Before a
//! scene can point at it, the bytes are written to a [`MediaStorage`] backend,
//! which hands back a [`MediaReference`] and, where the backend supports it, a
//! URL a player can open.
//!
//! # Example
//!
//! ```rust
//! use fabulist_storage::{FileSystemStorage, MediaMetadata, MediaStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/fabulist-media")?;
//! let metadata = MediaMetadata::audio("audio/mpeg").with_label("scene-1");
//!
//! let reference = storage.store(b"ID3...", &metadata).await?;
//! let url = storage.url(&reference).await?;
//! assert!(url.is_some_and(|u| u.starts_with("file://")));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use fabulist_error::FabulistResult;
use uuid::Uuid;

mod filesystem;

pub use fabulist_error::{StorageError, StorageErrorKind};
pub use filesystem::FileSystemStorage;

/// Pluggable backend for generated media bytes.
#[async_trait::async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store media and return a reference to it.
    ///
    /// Identical content maps to the same location.
    async fn store(&self, data: &[u8], metadata: &MediaMetadata)
    -> FabulistResult<MediaReference>;

    /// Read back stored media.
    async fn retrieve(&self, reference: &MediaReference) -> FabulistResult<Vec<u8>>;

    /// URL a player can open directly, if the backend has one.
    async fn url(&self, reference: &MediaReference) -> FabulistResult<Option<String>>;

    /// Remove stored media.
    async fn delete(&self, reference: &MediaReference) -> FabulistResult<()>;

    /// Whether the media is still present.
    async fn exists(&self, reference: &MediaReference) -> FabulistResult<bool>;
}

/// What is being stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMetadata {
    /// Kind of media
    pub media_type: MediaType,
    /// MIME type (e.g., "audio/mpeg")
    pub mime_type: String,
    /// Free-form label for logs, typically the scene identifier
    pub label: Option<String>,
}

impl MediaMetadata {
    /// Metadata for an audio clip.
    pub fn audio(mime_type: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Audio,
            mime_type: mime_type.into(),
            label: None,
        }
    }

    /// Metadata for an image.
    pub fn image(mime_type: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Image,
            mime_type: mime_type.into(),
            label: None,
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// File extension conventionally used for the MIME type.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "audio/mpeg" | "audio/mp3" => "mp3",
            "audio/wav" | "audio/x-wav" => "wav",
            "audio/ogg" => "ogg",
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "video/mp4" => "mp4",
            _ => "bin",
        }
    }
}

/// Reference to stored media.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaReference {
    /// Unique identifier for this reference
    pub id: Uuid,
    /// SHA-256 hash of the content
    pub content_hash: String,
    /// Storage backend name (e.g., "filesystem")
    pub storage_backend: String,
    /// Backend-specific location of the media
    pub storage_path: String,
    /// Size of the media in bytes
    pub size_bytes: u64,
    /// Kind of media
    pub media_type: MediaType,
    /// MIME type
    pub mime_type: String,
}

/// Kind of media content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    /// Illustrations
    Image,
    /// Narration
    Audio,
    /// Assembled video
    Video,
}

impl MediaType {
    /// Directory name used by path-based backends.
    pub fn directory(&self) -> &'static str {
        match self {
            MediaType::Image => "images",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        }
    }
}
