//! Fabulist CLI binary.
//!
//! This binary provides command-line access to Fabulist's functionality:
//! - Generate a story from a prompt and save it as JSON
//! - Regenerate a single scene of a saved story
//! - Print a saved story's transcript or illustration URLs
//! - Assemble a saved story into a video

use clap::Parser;
use fabulist::{
    Credentials, FabulistConfig, FabulistResult, ObservabilityConfig, UnsupportedVideoGenerator,
    build_story_service, init_observability, user_message,
};

mod cli;

use cli::{
    Cli, Commands, GenerateArgs, assemble_video, generate_story, print_image_urls,
    print_transcript, regenerate_scene,
};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let observability = ObservabilityConfig::default()
        .with_log_level(if cli.verbose { "debug" } else { "info" })
        .with_json_logs(cli.json_logs);
    if let Err(e) = init_observability(&observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", user_message(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> FabulistResult<()> {
    let config = match &cli.config {
        Some(path) => FabulistConfig::from_file(path)?,
        None => FabulistConfig::load()?,
    };

    match cli.command {
        Commands::Generate {
            prompt,
            genre,
            tone,
            audience,
            art_style,
            out,
        } => {
            let service = build_story_service(&config, &Credentials::from_env())?;
            let args = GenerateArgs {
                prompt,
                genre,
                tone,
                audience,
                art_style,
            };
            generate_story(&service, &args, &out).await
        }
        Commands::Regenerate { story, scene } => {
            let service = build_story_service(&config, &Credentials::from_env())?;
            regenerate_scene(&service, &story, &scene).await
        }
        Commands::Transcript { story } => print_transcript(&story).await,
        Commands::Images { story } => print_image_urls(&story).await,
        Commands::Video { story } => assemble_video(&UnsupportedVideoGenerator, &story).await,
    }
}
