//! Error types for building prompt messages from untyped input.
//!
//! Uses `thiserror` for typed variants that callers can match on.

use super::domain::{ParseContentKindError, ParseImageDetailError, ParseRoleError, Role};
use thiserror::Error;

/// Result type for message construction.
pub type MessageResult<T> = Result<T, MessageError>;

/// Errors raised while constructing a message or content item.
///
/// Construction fails fast: the first problem aborts the instance being
/// built and no partial value is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The role string is not one of the canonical roles.
    #[error("invalid role: '{0}'")]
    InvalidRole(String),

    /// A required field is absent.
    #[error("missing field '{field}' for {kind}")]
    MissingField {
        /// The absent field.
        field: &'static str,
        /// What was being built, e.g. `image` or `tool_call`.
        kind: &'static str,
    },

    /// A field is present but has the wrong shape.
    #[error("invalid field '{field}' for {kind}: {reason}")]
    InvalidField {
        /// The offending field.
        field: &'static str,
        /// What was being built.
        kind: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// A content item names an unrecognised kind.
    ///
    /// Only raised under [`crate::message::ports::normalizer::UnknownContentPolicy::Reject`].
    #[error("unknown content kind: '{0}'")]
    UnknownContentKind(String),

    /// The input names a role that belongs to a different message variant.
    #[error("role '{actual}' does not match expected role '{expected}'")]
    RoleMismatch {
        /// The role of the variant being built.
        expected: Role,
        /// The role found in the input.
        actual: Role,
    },

    /// A tool call id is neither a string nor a scalar.
    #[error("tool call id must be a scalar, got {0}")]
    InvalidToolCallId(String),

    /// The input is not shaped like a message or content item at all.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// An element of a message list could not be normalized.
    #[error("invalid message at index {index}: {source}")]
    InvalidMessage {
        /// Position of the offending element.
        index: usize,
        /// The error raised for that element.
        #[source]
        source: Box<MessageError>,
    },
}

impl MessageError {
    /// Wraps an element error with its position in a message list.
    #[must_use]
    pub fn at_index(index: usize, source: Self) -> Self {
        Self::InvalidMessage {
            index,
            source: Box::new(source),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub const fn missing_field(field: &'static str, kind: &'static str) -> Self {
        Self::MissingField { field, kind }
    }

    /// Creates an invalid field error.
    #[must_use]
    pub fn invalid_field(
        field: &'static str,
        kind: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field,
            kind,
            reason: reason.into(),
        }
    }

    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

impl From<ParseRoleError> for MessageError {
    fn from(err: ParseRoleError) -> Self {
        Self::InvalidRole(err.0)
    }
}

impl From<ParseContentKindError> for MessageError {
    fn from(err: ParseContentKindError) -> Self {
        Self::UnknownContentKind(err.0)
    }
}

impl From<ParseImageDetailError> for MessageError {
    fn from(err: ParseImageDetailError) -> Self {
        Self::invalid_field("detail", "image", err.to_string())
    }
}
