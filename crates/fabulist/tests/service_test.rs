//! Tests for wiring the hosted-provider pipeline.

use fabulist::{
    ConfigError, Credentials, FabulistConfig, FabulistError, FabulistErrorKind, ObservabilityConfig,
    SegmentProtocol, StoryError, StoryErrorKind, build_story_service, user_message,
};

fn config_with_media_dir(dir: &std::path::Path) -> FabulistConfig {
    let mut config = FabulistConfig::default();
    config.storage.media_dir = Some(dir.join("media"));
    config
}

#[test]
fn test_missing_openai_key_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let credentials = Credentials::new(None, Some("el-key".to_string()));

    let err = build_story_service(&config_with_media_dir(dir.path()), &credentials)
        .err()
        .unwrap();
    assert!(matches!(err.kind(), FabulistErrorKind::Config(_)));
    assert!(user_message(&err).contains("not configured"));
    assert!(!dir.path().join("media").exists());
}

#[tokio::test]
async fn test_missing_elevenlabs_key_only_silences_narration() {
    let dir = tempfile::tempdir().unwrap();
    let credentials = Credentials::new(Some("sk-test".to_string()), None);

    let service = build_story_service(&config_with_media_dir(dir.path()), &credentials).unwrap();

    let audio = service.render_narration("Once upon a time", "scene-1").await;
    assert!(audio.is_degraded());
    assert_eq!(audio.url(), "");
}

#[test]
fn test_service_carries_configured_settings() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_with_media_dir(dir.path());
    config.chat.rewrite_model = "gpt-4o".to_string();
    config.pipeline.protocol = SegmentProtocol::Indexed;
    config.pipeline.scene_count = 3;
    config.image.fallback_host = "stock.example".to_string();
    let credentials = Credentials::new(Some("sk-test".to_string()), Some("el-key".to_string()));

    let service = build_story_service(&config, &credentials).unwrap();

    let settings = service.settings();
    assert_eq!(settings.rewrite_model(), "gpt-4o");
    assert_eq!(*settings.protocol(), SegmentProtocol::Indexed);
    assert_eq!(*settings.scene_count(), 3);
    assert_eq!(settings.fallback_host(), "stock.example");
    assert!(dir.path().join("media").is_dir());
}

#[test]
fn test_user_messages_hide_details() {
    let empty: FabulistError = StoryError::new(StoryErrorKind::EmptyPrompt).into();
    assert_eq!(user_message(&empty), "Please enter a story idea.");

    let rewrite: FabulistError = StoryError::new(StoryErrorKind::SceneRewrite).into();
    assert_eq!(
        user_message(&rewrite),
        "Failed to regenerate scene. Please try again."
    );

    let config: FabulistError = ConfigError::new("OPENAI_API_KEY not set").into();
    assert!(!user_message(&config).contains("OPENAI_API_KEY"));
}

#[test]
fn test_observability_defaults() {
    let config = ObservabilityConfig::default();
    assert_eq!(config.service_name, "fabulist");
    assert_eq!(config.log_level, "info");
    assert!(!config.json_logs);

    let verbose = config.with_log_level("debug").with_json_logs(true);
    assert_eq!(verbose.log_level, "debug");
    assert!(verbose.json_logs);
}
