//! Read-only commands over a saved story.

use fabulist::{FabulistResult, VideoGenerator, VideoOutcome, load_story};
use std::path::Path;

/// Print the transcript of a saved story.
pub async fn print_transcript(path: &Path) -> FabulistResult<()> {
    let story = load_story(path).await?;
    print!("{}", story.transcript());
    Ok(())
}

/// Print the illustration URLs of a saved story, skipping scenes without one.
pub async fn print_image_urls(path: &Path) -> FabulistResult<()> {
    let story = load_story(path).await?;
    for url in story.image_urls() {
        println!("{}", url);
    }
    Ok(())
}

/// Ask a video generator to assemble a saved story and report the result.
pub async fn assemble_video<V: VideoGenerator>(video: &V, path: &Path) -> FabulistResult<()> {
    let story = load_story(path).await?;
    match video.generate_video(story.scenes()).await? {
        VideoOutcome::Rendered { url } => println!("Video ready: {}", url),
        VideoOutcome::Unsupported { reason } => println!("{}", reason),
    }
    Ok(())
}
