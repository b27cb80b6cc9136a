//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fabulist - illustrated, narrated stories from a single prompt
#[derive(Parser, Debug)]
#[command(name = "fabulist")]
#[command(about = "Generate illustrated, narrated stories from a single prompt", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new story
    Generate {
        /// Story idea
        #[arg(long)]
        prompt: String,

        /// Genre (e.g. fantasy, mystery, sci-fi)
        #[arg(long)]
        genre: Option<String>,

        /// Tone (e.g. adventurous, whimsical, dark)
        #[arg(long)]
        tone: Option<String>,

        /// Intended audience (children, teens, adults)
        #[arg(long)]
        audience: Option<String>,

        /// Illustration style (e.g. watercolor, cartoon)
        #[arg(long)]
        art_style: Option<String>,

        /// Where to write the story JSON
        #[arg(long, default_value = "story.json")]
        out: PathBuf,
    },

    /// Rewrite one scene of a saved story and refresh its media
    Regenerate {
        /// Story JSON file, updated in place
        #[arg(long)]
        story: PathBuf,

        /// Scene identifier, as printed by `generate`
        #[arg(long)]
        scene: String,
    },

    /// Print the plain-text transcript of a saved story
    Transcript {
        /// Story JSON file
        #[arg(long)]
        story: PathBuf,
    },

    /// Print the illustration URLs of a saved story, one per line
    Images {
        /// Story JSON file
        #[arg(long)]
        story: PathBuf,
    },

    /// Assemble a saved story into a video
    Video {
        /// Story JSON file
        #[arg(long)]
        story: PathBuf,
    },
}
