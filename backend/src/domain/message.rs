//! Message data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors returned by the message constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValidationError {
    EmptyId,
    EmptyContent,
    ContentTooLong { max: usize },
}

impl fmt::Display for MessageValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "message id must not be empty"),
            Self::EmptyContent => write!(f, "message content must not be empty"),
            Self::ContentTooLong { max } => {
                write!(f, "message content must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for MessageValidationError {}

/// Opaque identifier assigned by the persistence side at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageId(String);

impl MessageId {
    /// Validate and construct a [`MessageId`] from owned input.
    pub fn new(id: impl Into<String>) -> Result<Self, MessageValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(MessageValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MessageId> for String {
    fn from(value: MessageId) -> Self {
        value.0
    }
}

impl TryFrom<String> for MessageId {
    type Error = MessageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum allowed length for message content, in characters.
pub const MESSAGE_CONTENT_MAX: usize = 250;

/// Validated message body.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
/// - At most [`MESSAGE_CONTENT_MAX`] characters.
///
/// The original input is preserved verbatim; trimming is applied only for
/// the emptiness check, never to the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageContent(String);

impl MessageContent {
    /// Validate and construct [`MessageContent`] from owned input.
    pub fn new(content: impl Into<String>) -> Result<Self, MessageValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(MessageValidationError::EmptyContent);
        }
        if content.chars().count() > MESSAGE_CONTENT_MAX {
            return Err(MessageValidationError::ContentTooLong {
                max: MESSAGE_CONTENT_MAX,
            });
        }
        Ok(Self(content))
    }
}

impl AsRef<str> for MessageContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MessageContent> for String {
    fn from(value: MessageContent) -> Self {
        value.0
    }
}

impl TryFrom<String> for MessageContent {
    type Error = MessageValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A message accepted for storage but not yet persisted.
///
/// Drafts carry everything except the identifier, which the persistence
/// side assigns on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    content: MessageContent,
    timestamp: DateTime<Utc>,
}

impl MessageDraft {
    /// Bundle validated content with its creation instant.
    pub fn new(content: MessageContent, timestamp: DateTime<Utc>) -> Self {
        Self { content, timestamp }
    }

    /// Message body.
    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Creation instant assigned by the service.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Stored message.
///
/// ## Invariants
/// - `id` is assigned by the persistence side and never changes.
/// - `content` satisfies the [`MessageContent`] rules.
/// - `timestamp` is the creation instant; messages are never updated.
///
/// Serialises as `{"id": ..., "content": ..., "timestamp": ...}` with the
/// timestamp in RFC 3339 UTC form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MessageDto", into = "MessageDto")]
pub struct Message {
    id: MessageId,
    content: MessageContent,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Assemble a stored message from its validated parts.
    pub fn new(id: MessageId, content: MessageContent, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            timestamp,
        }
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Message body, exactly as supplied by the author.
    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Creation instant.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageDto {
    id: String,
    content: String,
    timestamp: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(value: Message) -> Self {
        Self {
            id: value.id.into(),
            content: value.content.into(),
            timestamp: value.timestamp,
        }
    }
}

impl TryFrom<MessageDto> for Message {
    type Error = MessageValidationError;

    fn try_from(value: MessageDto) -> Result<Self, Self::Error> {
        let MessageDto {
            id,
            content,
            timestamp,
        } = value;

        Ok(Message {
            id: MessageId::new(id)?,
            content: MessageContent::new(content)?,
            timestamp,
        })
    }
}
