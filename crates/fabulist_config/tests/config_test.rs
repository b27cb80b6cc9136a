//! Tests for the configuration loader.

use fabulist_config::{Credentials, FabulistConfig};
use fabulist_core::SegmentProtocol;
use std::io::Write;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_bundled_defaults_match_struct_defaults() {
    let empty = toml_file("");
    let config = FabulistConfig::from_file(empty.path()).unwrap();

    assert_eq!(config, FabulistConfig::default());
    assert_eq!(config.chat.model, "gpt-oss-20b");
    assert_eq!(config.chat.rewrite_model, "gpt-4");
    assert_eq!(config.image.model, "dall-e-3");
    assert_eq!(config.image.fallback_host, "images.pexels.com");
    assert_eq!(config.speech.voice_id, "pNInz6obpgDQGcFmaJgB");
    assert_eq!(config.speech.stability, 0.5);
    assert_eq!(config.pipeline.protocol, SegmentProtocol::Separator);
    assert_eq!(config.pipeline.scene_count, 5);
    assert!(config.request_timeout().is_none());
}

#[test]
fn test_file_overrides_individual_keys() {
    let file = toml_file(
        r#"
request_timeout_secs = 30

[chat]
base_url = "http://localhost:8080/v1"

[pipeline]
protocol = "indexed"
scene_count = 3

[storage]
media_dir = "/srv/fabulist"
"#,
    );
    let config = FabulistConfig::from_file(file.path()).unwrap();

    assert_eq!(config.chat.base_url, "http://localhost:8080/v1");
    assert_eq!(config.chat.model, "gpt-oss-20b");
    assert_eq!(config.pipeline.protocol, SegmentProtocol::Indexed);
    assert_eq!(config.pipeline.scene_count, 3);
    assert_eq!(
        config.storage.resolved_media_dir(),
        std::path::PathBuf::from("/srv/fabulist")
    );
    assert_eq!(config.request_timeout(), Some(std::time::Duration::from_secs(30)));
}

#[test]
fn test_invalid_file_is_config_error() {
    let file = toml_file("[pipeline]\nprotocol = \"telepathy\"\n");
    let err = FabulistConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_missing_file_is_config_error() {
    let err = FabulistConfig::from_file("/definitely/not/here/fabulist.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read configuration"));
}

#[test]
fn test_missing_credentials_name_the_variable() {
    let credentials = Credentials::new(Some("sk-test".to_string()), None);

    assert_eq!(credentials.openai().unwrap(), "sk-test");
    let err = credentials.elevenlabs().unwrap_err();
    assert!(err.to_string().contains("ELEVENLABS_API_KEY"));
}

#[test]
fn test_credentials_debug_redacts_keys() {
    let credentials = Credentials::new(Some("sk-secret".to_string()), None);
    let rendered = format!("{:?}", credentials);
    assert!(!rendered.contains("sk-secret"));
    assert!(rendered.contains("redacted"));
}
