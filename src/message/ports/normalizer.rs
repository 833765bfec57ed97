//! Normalizer port for building typed messages from untyped input.
//!
//! Defines the abstract interface and the configuration that tunes how
//! lenient normalization is.

use crate::message::{
    domain::{
        AssistantMessage, Content, Message, MessageContent, SystemMessage, ToolMessage,
        UserMessage,
    },
    error::MessageResult,
};
use serde_json::Value;

/// Port for turning untyped maps into typed messages.
///
/// Normalization runs once per instance. Implementations must be stateless
/// and thread-safe; nothing is mutated after it returns.
pub trait MessageNormalizer: Send + Sync {
    /// Builds a single content item.
    ///
    /// Returns `Ok(None)` when the item has an unrecognised kind and the
    /// configuration drops such items.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if a required field is missing or malformed,
    /// or if unknown kinds are configured to be rejected.
    fn normalize_content_item(&self, value: &Value) -> MessageResult<Option<Content>>;

    /// Normalizes a raw message body.
    ///
    /// Strings pass through verbatim, `null` becomes `None`, and arrays are
    /// normalized item by item in order.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if any retained item is invalid.
    fn normalize_content(&self, value: &Value) -> MessageResult<Option<MessageContent>>;

    /// Builds a message of whatever variant the `role` field names.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if the role is absent or unknown, or if any
    /// field fails validation.
    fn normalize_message(&self, value: &Value) -> MessageResult<Message>;

    /// Builds a system message. An absent `role` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` on invalid fields or a conflicting role.
    fn normalize_system(&self, value: &Value) -> MessageResult<SystemMessage>;

    /// Builds a user message. An absent `role` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` on invalid fields or a conflicting role.
    fn normalize_user(&self, value: &Value) -> MessageResult<UserMessage>;

    /// Builds an assistant message. An absent `role` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` on invalid fields, malformed tool calls or a
    /// conflicting role.
    fn normalize_assistant(&self, value: &Value) -> MessageResult<AssistantMessage>;

    /// Builds a tool message. An absent `role` is accepted.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if `tool_call_id` is missing, on invalid fields
    /// or a conflicting role.
    fn normalize_tool(&self, value: &Value) -> MessageResult<ToolMessage>;
}

/// What to do with a content item whose `type` is not recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownContentPolicy {
    /// Silently drop the item from the resulting list.
    #[default]
    Drop,
    /// Fail with `MessageError::UnknownContentKind`.
    Reject,
}

/// What to do when a typed variant is built from input naming another role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoleMismatchPolicy {
    /// Fail with `MessageError::RoleMismatch`.
    #[default]
    Reject,
    /// Ignore the input role and use the variant's own.
    Canonicalize,
}

/// Configuration for normalization.
///
/// # Examples
///
/// ```
/// use prompt_message::message::ports::normalizer::{
///     NormalizationConfig, RoleMismatchPolicy, UnknownContentPolicy,
/// };
///
/// let config = NormalizationConfig::default();
/// assert_eq!(config.unknown_content, UnknownContentPolicy::Drop);
/// assert_eq!(config.role_mismatch, RoleMismatchPolicy::Reject);
///
/// let strict = NormalizationConfig::strict();
/// assert_eq!(strict.unknown_content, UnknownContentPolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationConfig {
    /// Handling of unrecognised content kinds.
    pub unknown_content: UnknownContentPolicy,
    /// Handling of conflicting roles.
    pub role_mismatch: RoleMismatchPolicy,
}

impl NormalizationConfig {
    /// Drops unknown content and canonicalises conflicting roles.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            unknown_content: UnknownContentPolicy::Drop,
            role_mismatch: RoleMismatchPolicy::Canonicalize,
        }
    }

    /// Rejects unknown content and conflicting roles.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            unknown_content: UnknownContentPolicy::Reject,
            role_mismatch: RoleMismatchPolicy::Reject,
        }
    }
}
