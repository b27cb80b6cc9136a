//! Stories saved as JSON files.

use fabulist_core::Story;
use fabulist_error::{FabulistResult, JsonError, StorageError, StorageErrorKind};
use std::path::Path;

/// Read a story written by [`save_story`].
pub async fn load_story(path: impl AsRef<Path>) -> FabulistResult<Story> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    let story = serde_json::from_slice(&bytes).map_err(|e| {
        JsonError::new(format!("Failed to parse story {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), "Loaded story");
    Ok(story)
}

/// Write a story as pretty-printed JSON, replacing any existing file.
pub async fn save_story(story: &Story, path: impl AsRef<Path>) -> FabulistResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(story)
        .map_err(|e| JsonError::new(format!("Failed to serialize story: {}", e)))?;
    tokio::fs::write(path, json).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    tracing::debug!(path = %path.display(), scenes = story.scenes().len(), "Saved story");
    Ok(())
}
