//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Speaker of a chat message.
///
/// Serializes in the lowercase form chat-completion APIs expect.
///
/// # Examples
///
/// ```
/// use fabulist_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// assert_ne!(Role::User, Role::Assistant);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions framing the conversation
    #[display("system")]
    System,
    /// Content supplied by the caller
    #[display("user")]
    User,
    /// Content produced by the model
    #[display("assistant")]
    Assistant,
}
