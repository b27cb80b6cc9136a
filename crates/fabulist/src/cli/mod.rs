//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the fabulist binary.

mod commands;
mod generate;
mod regenerate;
mod story;

pub use commands::{Cli, Commands};
pub use generate::{GenerateArgs, generate_story};
pub use regenerate::regenerate_scene;
pub use story::{assemble_video, print_image_urls, print_transcript};
