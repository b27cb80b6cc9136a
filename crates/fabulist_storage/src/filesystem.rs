//! Filesystem-based media storage.

use crate::{MediaMetadata, MediaReference, MediaStorage, MediaType};
use fabulist_error::{FabulistResult, StorageError, StorageErrorKind};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const BACKEND: &str = "filesystem";

/// Stores media under `{base}/{type}/{hash[0:2]}/{hash[2:4]}/{hash}.{ext}`.
///
/// The base directory is canonicalized on construction so that stored paths
/// are absolute and can be turned into `file://` URLs.
///
/// ```text
/// ~/.local/share/fabulist/media/
/// └── audio/
///     └── 12/
///         └── 34/
///             └── 123456abcdef....mp3
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Open (creating if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or resolved.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> FabulistResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;
        let base_path = std::fs::canonicalize(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidPath(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened filesystem storage");
        Ok(Self { base_path })
    }

    /// Root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    fn path_for(&self, hash: &str, media_type: MediaType, extension: &str) -> PathBuf {
        self.base_path
            .join(media_type.directory())
            .join(&hash[0..2])
            .join(&hash[2..4])
            .join(format!("{}.{}", hash, extension))
    }

    fn reference(hash: String, path: &Path, data: &[u8], metadata: &MediaMetadata) -> MediaReference {
        MediaReference {
            id: Uuid::new_v4(),
            content_hash: hash,
            storage_backend: BACKEND.to_string(),
            storage_path: path.to_string_lossy().to_string(),
            size_bytes: data.len() as u64,
            media_type: metadata.media_type,
            mime_type: metadata.mime_type.clone(),
        }
    }

    fn verify_hash(data: &[u8], expected_hash: &str) -> FabulistResult<()> {
        let actual_hash = Self::compute_hash(data);
        if actual_hash != expected_hash {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                "Hash mismatch: expected {}, got {}",
                expected_hash, actual_hash
            )))
            .into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MediaStorage for FileSystemStorage {
    #[tracing::instrument(
        skip(self, data, metadata),
        fields(size = data.len(), media_type = %metadata.media_type, label = ?metadata.label)
    )]
    async fn store(&self, data: &[u8], metadata: &MediaMetadata) -> FabulistResult<MediaReference> {
        let hash = Self::compute_hash(data);
        let path = self.path_for(&hash, metadata.media_type, metadata.extension());

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!(hash = %hash, path = %path.display(), "Media already stored");
            return Ok(Self::reference(hash, &path, data, metadata));
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Temp file plus rename keeps readers from seeing a partial clip.
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(hash = %hash, path = %path.display(), "Stored media file");
        Ok(Self::reference(hash, &path, data, metadata))
    }

    #[tracing::instrument(skip(self, reference), fields(path = %reference.storage_path))]
    async fn retrieve(&self, reference: &MediaReference) -> FabulistResult<Vec<u8>> {
        let path = Path::new(&reference.storage_path);

        let data = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(reference.storage_path.clone()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        Self::verify_hash(&data, &reference.content_hash)?;
        Ok(data)
    }

    async fn url(&self, reference: &MediaReference) -> FabulistResult<Option<String>> {
        Ok(Some(format!("file://{}", reference.storage_path)))
    }

    #[tracing::instrument(skip(self, reference), fields(path = %reference.storage_path))]
    async fn delete(&self, reference: &MediaReference) -> FabulistResult<()> {
        let path = Path::new(&reference.storage_path);

        tokio::fs::remove_file(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(reference.storage_path.clone()))
            } else {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "delete {}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(path = %path.display(), "Deleted media file");
        Ok(())
    }

    async fn exists(&self, reference: &MediaReference) -> FabulistResult<bool> {
        Ok(tokio::fs::try_exists(&reference.storage_path)
            .await
            .unwrap_or(false))
    }
}
