use fabulist_core::{MediaOutcome, StoryScene};
use fabulist_interface::VideoGenerator;
use fabulist_models::UnsupportedVideoGenerator;

#[tokio::test]
async fn video_is_always_unsupported() {
    let scenes = vec![StoryScene::new(
        1,
        "The fox leaps.",
        "cartoon fox",
        MediaOutcome::resolved("https://img.example/1.png"),
        MediaOutcome::resolved("file:///tmp/1.mp3"),
    )];

    let outcome = UnsupportedVideoGenerator.generate_video(&scenes).await.unwrap();
    assert!(outcome.url().is_none());
}
