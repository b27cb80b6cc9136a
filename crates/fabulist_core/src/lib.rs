//! Core data types for the Fabulist story generation library.
//!
//! Two groups live here: the chat types exchanged with a language model
//! ([`Message`], [`GenerateRequest`], [`GenerateResponse`]) and the story
//! types handed back to callers ([`StoryRequest`], [`StoryScene`],
//! [`Story`], [`MediaOutcome`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod message;
mod request;
mod role;
mod scene;
mod segment;
mod story;
mod story_request;

pub use media::{AudioClip, GeneratedImage, MediaOutcome, VideoOutcome};
pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
};
pub use role::Role;
pub use scene::{StoryScene, scene_id};
pub use segment::SegmentProtocol;
pub use story::Story;
pub use story_request::{
    ART_STYLES, AUDIENCES, GENRES, StoryRequest, StoryRequestBuilder, StoryRequestBuilderError,
    TONES,
};
