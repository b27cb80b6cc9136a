//! Story generation command handler.

use fabulist::{ConfigError, FabulistResult, Story, StoryRequest, StoryService, save_story};
use std::path::Path;

/// Parameters from the `generate` command line.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub prompt: String,
    pub genre: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub art_style: Option<String>,
}

impl GenerateArgs {
    /// Request with unspecified labels left at their defaults.
    pub fn to_request(&self) -> FabulistResult<StoryRequest> {
        let mut builder = StoryRequest::builder();
        builder.prompt(self.prompt.clone());
        if let Some(genre) = &self.genre {
            builder.genre(genre.clone());
        }
        if let Some(tone) = &self.tone {
            builder.tone(tone.clone());
        }
        if let Some(audience) = &self.audience {
            builder.audience(audience.clone());
        }
        if let Some(art_style) = &self.art_style {
            builder.art_style(art_style.clone());
        }
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid story parameters: {}", e)).into())
    }
}

/// Generate a story, save it and print a summary.
#[tracing::instrument(skip(service, args), fields(out = %out.display()))]
pub async fn generate_story(
    service: &StoryService,
    args: &GenerateArgs,
    out: &Path,
) -> FabulistResult<()> {
    let request = args.to_request()?;
    let scenes = service.generate_complete_story(&request).await?;
    let story = Story::from_scenes(request, scenes);
    save_story(&story, out).await?;

    println!("{}", story.title());
    println!("{:-<80}", "");
    for scene in story.scenes() {
        let mut notes = Vec::new();
        if scene.image().is_degraded() {
            notes.push("stock image");
        }
        if !scene.audio().is_available() {
            notes.push("no narration");
        }
        if notes.is_empty() {
            println!("{}", scene.id());
        } else {
            println!("{} ({})", scene.id(), notes.join(", "));
        }
    }
    println!("{:-<80}", "");
    println!("Saved {} scenes to {}", story.scenes().len(), out.display());
    Ok(())
}
