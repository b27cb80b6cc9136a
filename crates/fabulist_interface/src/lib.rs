//! Trait definitions for the Fabulist story generation library.
//!
//! Each generative service the story pipeline talks to sits behind one of
//! these traits, so the pipeline can be driven by real HTTP clients or by
//! scripted test doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ChatDriver, ImageGenerator, SpeechSynthesizer, VideoGenerator};
