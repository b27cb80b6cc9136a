//! Scene regeneration command handler.

use fabulist::{
    FabulistResult, StoryError, StoryErrorKind, StoryService, load_story, save_story,
};
use std::path::Path;

/// Regenerate one scene of a saved story with its recorded parameters.
#[tracing::instrument(skip(service, path), fields(story = %path.display()))]
pub async fn regenerate_scene(
    service: &StoryService,
    path: &Path,
    scene_id: &str,
) -> FabulistResult<()> {
    let mut story = load_story(path).await?;
    let scene = story
        .scene(scene_id)
        .cloned()
        .ok_or_else(|| StoryError::new(StoryErrorKind::SceneNotFound(scene_id.to_string())))?;

    let request = story.request().clone();
    let updated = service.regenerate_scene(&scene, &request).await?;
    story.replace_scene(updated.clone());
    save_story(&story, path).await?;

    println!("{}:\n{}", updated.id(), updated.text());
    Ok(())
}
