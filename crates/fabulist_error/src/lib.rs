//! Error types for the Fabulist library.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - constructors use `#[track_caller]` for automatic location capture
//!
//! Everything folds into [`FabulistError`] so callers can use `?` across
//! crate boundaries.
//!
//! # Examples
//!
//! ```
//! use fabulist_error::{FabulistResult, HttpError};
//!
//! fn fetch_scene() -> FabulistResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(fetch_scene().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod message;
mod provider;
mod storage;
mod story;

pub use error::{FabulistError, FabulistErrorKind, FabulistResult};
pub use message::{ConfigError, HttpError, JsonError};
pub use provider::{ProviderError, ProviderErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use story::{StoryError, StoryErrorKind};
