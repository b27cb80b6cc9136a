//! Chat message type.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat-completion conversation.
///
/// # Examples
///
/// ```
/// use fabulist_core::{Message, Role};
///
/// let message = Message::user("Story idea: a fox learns to fly");
/// assert_eq!(*message.role(), Role::User);
/// assert!(message.content().starts_with("Story idea"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// Message text
    content: String,
}

impl Message {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a builder for `Message`.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
