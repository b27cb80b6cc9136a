use fabulist_core::{MediaOutcome, StoryRequest, StoryScene, TONES};

fn sample_scene() -> StoryScene {
    StoryScene::new(
        2,
        "The fox spreads borrowed wings.",
        "cartoon fox with paper wings at dawn",
        MediaOutcome::resolved("https://img.example/fox.png"),
        MediaOutcome::degraded("", "speech provider unavailable"),
    )
}

#[test]
fn scene_id_encodes_order() {
    let scene = sample_scene();
    assert!(scene.id().starts_with("scene-2-"));
    assert_eq!(*scene.order(), 2);
}

#[test]
fn replace_content_keeps_identity() {
    let scene = sample_scene();
    let replaced = scene.replace_content(
        "The fox glides home.",
        "fox gliding over hills",
        MediaOutcome::degraded("https://images.pexels.com/photos/1/pexels-photo-2.jpeg", "timeout"),
        MediaOutcome::resolved("file:///tmp/narration.mp3"),
    );

    assert_eq!(replaced.id(), scene.id());
    assert_eq!(replaced.order(), scene.order());
    assert_eq!(replaced.text(), "The fox glides home.");
    assert_eq!(replaced.image_prompt(), "fox gliding over hills");
    assert!(replaced.image().is_degraded());
    assert_eq!(replaced.narration(), Some("file:///tmp/narration.mp3"));
}

#[test]
fn serialized_scene_carries_flat_urls() {
    let scene = sample_scene();
    let value = serde_json::to_value(&scene).unwrap();

    assert_eq!(value["imageUrl"], "https://img.example/fox.png");
    assert_eq!(value["audioUrl"], "");
    assert_eq!(value["imagePrompt"], "cartoon fox with paper wings at dawn");
    assert_eq!(value["audio"]["status"], "degraded");
    assert_eq!(value["audio"]["reason"], "speech provider unavailable");

    let restored: StoryScene = serde_json::from_value(value).unwrap();
    assert_eq!(restored, scene);
}

#[test]
fn default_request_uses_first_suggestions() {
    let request = StoryRequest::default();
    assert_eq!(request.genre(), "fantasy");
    assert_eq!(request.tone(), TONES[0]);
    assert_eq!(request.audience(), "children");
    assert_eq!(request.art_style(), "cartoon");
    assert!(!request.has_prompt());
}

#[test]
fn whitespace_prompt_is_not_a_prompt() {
    let request = StoryRequest::default().with_prompt("  \n\t ");
    assert!(!request.has_prompt());
}

#[test]
fn request_serializes_camel_case() {
    let request = StoryRequest::builder()
        .prompt("a fox learns to fly")
        .art_style("watercolor")
        .build()
        .unwrap();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["artStyle"], "watercolor");
    assert_eq!(value["prompt"], "a fox learns to fly");
}
