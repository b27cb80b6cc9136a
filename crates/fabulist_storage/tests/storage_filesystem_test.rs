//! Tests for filesystem storage backend.

use fabulist_error::FabulistErrorKind;
use fabulist_storage::{
    FileSystemStorage, MediaMetadata, MediaReference, MediaStorage, MediaType, StorageErrorKind,
};
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn test_store_and_retrieve() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let data = b"narration bytes";
    let metadata = MediaMetadata::audio("audio/mpeg").with_label("scene-1-0");

    let reference = storage.store(data, &metadata).await.unwrap();

    assert_eq!(reference.storage_backend, "filesystem");
    assert_eq!(reference.media_type, MediaType::Audio);
    assert_eq!(reference.mime_type, "audio/mpeg");
    assert_eq!(reference.size_bytes, data.len() as u64);
    assert!(reference.storage_path.ends_with(".mp3"));

    let retrieved = storage.retrieve(&reference).await.unwrap();
    assert_eq!(retrieved, data);
}

#[tokio::test]
async fn test_deduplication() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let metadata = MediaMetadata::audio("audio/mpeg");
    let first = storage.store(b"same clip", &metadata).await.unwrap();
    let second = storage.store(b"same clip", &metadata).await.unwrap();

    assert_eq!(first.content_hash, second.content_hash);
    assert_eq!(first.storage_path, second.storage_path);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_content_addressable_layout() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let reference = storage
        .store(b"layout", &MediaMetadata::audio("audio/mpeg"))
        .await
        .unwrap();

    let hash = &reference.content_hash;
    let expected = storage
        .base_path()
        .join("audio")
        .join(&hash[0..2])
        .join(&hash[2..4])
        .join(format!("{}.mp3", hash));
    assert_eq!(std::path::PathBuf::from(&reference.storage_path), expected);
}

#[tokio::test]
async fn test_url_is_file_scheme() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let reference = storage
        .store(b"playable", &MediaMetadata::audio("audio/mpeg"))
        .await
        .unwrap();
    let url = storage.url(&reference).await.unwrap().unwrap();

    assert_eq!(url, format!("file://{}", reference.storage_path));
    assert!(std::path::Path::new(&reference.storage_path).is_absolute());
}

#[tokio::test]
async fn test_hash_verification() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let reference = storage
        .store(b"original", &MediaMetadata::image("image/png"))
        .await
        .unwrap();
    std::fs::write(&reference.storage_path, b"tampered").unwrap();

    let err = storage.retrieve(&reference).await.unwrap_err();
    match err.kind() {
        FabulistErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::InvalidPath(_)));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_delete() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let reference = storage
        .store(b"short-lived", &MediaMetadata::audio("audio/mpeg"))
        .await
        .unwrap();
    assert!(storage.exists(&reference).await.unwrap());

    storage.delete(&reference).await.unwrap();
    assert!(!storage.exists(&reference).await.unwrap());
}

#[tokio::test]
async fn test_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let reference = MediaReference {
        id: Uuid::new_v4(),
        content_hash: "00".repeat(32),
        storage_backend: "filesystem".to_string(),
        storage_path: temp_dir.path().join("missing.mp3").to_string_lossy().to_string(),
        size_bytes: 0,
        media_type: MediaType::Audio,
        mime_type: "audio/mpeg".to_string(),
    };

    let err = storage.retrieve(&reference).await.unwrap_err();
    assert!(err.to_string().contains("Media not found"));
}

#[test]
fn test_media_type_round_trips_through_strings() {
    assert_eq!(MediaType::Audio.to_string(), "audio");
    assert_eq!("video".parse::<MediaType>().unwrap(), MediaType::Video);
    assert_eq!(MediaMetadata::image("image/jpeg").extension(), "jpg");
    assert_eq!(MediaMetadata::audio("audio/flac").extension(), "bin");
}
