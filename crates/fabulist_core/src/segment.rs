//! How a model is asked to delimit multi-part answers.

use serde::{Deserialize, Serialize};

/// Delimiting convention for responses that carry one segment per scene.
///
/// `Separator` asks for segments joined by `|||`. `Indexed` asks for
/// `[1]`, `[2]`, ... tags, which lets the reader check the segment count.
///
/// # Examples
///
/// ```
/// use fabulist_core::SegmentProtocol;
///
/// assert_eq!(SegmentProtocol::default(), SegmentProtocol::Separator);
/// assert_eq!(SegmentProtocol::Indexed.to_string(), "indexed");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SegmentProtocol {
    /// Segments separated by `|||`
    #[default]
    #[display("separator")]
    Separator,
    /// Segments introduced by `[n]` tags
    #[display("indexed")]
    Indexed,
}
