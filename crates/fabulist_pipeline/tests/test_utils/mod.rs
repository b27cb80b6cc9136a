//! Test utilities for pipeline tests.
//!
//! Scripted stand-ins for every provider the pipeline talks to.

pub mod mock_providers;

#[allow(unused_imports)]
pub use mock_providers::{
    EventLog, FailingStorage, GatedImages, GatedSpeech, MockChat, MockImages, MockResponse,
    MockSpeech, MockVideo,
};
