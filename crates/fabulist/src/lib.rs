//! Fabulist - illustrated, narrated stories from a single prompt
//!
//! Fabulist asks a chat model for a short story split into scenes, turns
//! every scene into an image prompt, then illustrates and narrates each
//! scene. Media failures never fail a story: a stock photo stands in for a
//! missing illustration and a scene without narration is simply silent.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fabulist::{Credentials, FabulistConfig, Story, StoryRequest, build_story_service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FabulistConfig::load()?;
//!     let service = build_story_service(&config, &Credentials::from_env())?;
//!
//!     let request = StoryRequest::default().with_prompt("A fox learns to fly");
//!     let scenes = service.generate_complete_story(&request).await?;
//!     println!("{}", Story::from_scenes(request, scenes).transcript());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `fabulist_core` - Story, scene and chat types
//! - `fabulist_error` - Error types
//! - `fabulist_interface` - Provider traits
//! - `fabulist_config` - Layered configuration and credentials
//! - `fabulist_storage` - Content-addressed media storage
//! - `fabulist_models` - HTTP provider clients
//! - `fabulist_pipeline` - Story generation pipeline
//!
//! This crate re-exports everything and hosts the `fabulist` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;
mod report;
mod service;
mod story_file;

pub use fabulist_config::*;
pub use fabulist_core::*;
pub use fabulist_error::*;
pub use fabulist_interface::*;
pub use fabulist_models::*;
pub use fabulist_pipeline::*;
pub use fabulist_storage::*;

pub use observability::{ObservabilityConfig, init_observability};
pub use report::user_message;
pub use service::{StoryService, build_story_service};
pub use story_file::{load_story, save_story};
