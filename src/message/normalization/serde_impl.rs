//! serde `Deserialize` implementations and `from_value` constructors.
//!
//! Every domain type is decoded by first buffering a [`Value`] and then
//! running it through a [`DefaultMessageNormalizer`] with the default
//! configuration, so the wire path and the map path share one set of rules.

use super::{rules, service::DefaultMessageNormalizer};
use crate::message::{
    domain::{
        AssistantMessage, Content, Message, MessageContent, SystemMessage, ToolCall, ToolMessage,
        UserMessage,
    },
    error::{MessageError, MessageResult},
    ports::normalizer::{MessageNormalizer, UnknownContentPolicy},
};
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

fn decode<'de, D, T>(
    deserializer: D,
    build: impl FnOnce(&Value) -> MessageResult<T>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    build(&value).map_err(D::Error::custom)
}

impl Content {
    /// Builds a single content item from a JSON map.
    ///
    /// A lone item has nowhere to be dropped to, so unknown kinds are
    /// rejected here regardless of configuration.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if the item is invalid or of an unknown kind.
    pub fn from_value(value: &Value) -> MessageResult<Self> {
        rules::parse_content(value, UnknownContentPolicy::Reject)?
            .ok_or_else(|| MessageError::UnknownContentKind(rules::describe_tag(value)))
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, Self::from_value)
    }
}

impl<'de> Deserialize<'de> for MessageContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, |value| {
            DefaultMessageNormalizer::new()
                .normalize_content(value)?
                .ok_or(MessageError::missing_field("content", "message"))
        })
    }
}

impl ToolCall {
    /// Builds a tool call from a JSON map, coercing a scalar `id` to a string.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if a required field is absent or malformed.
    pub fn from_value(value: &Value) -> MessageResult<Self> {
        rules::parse_tool_call(value)
    }
}

impl<'de> Deserialize<'de> for ToolCall {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, Self::from_value)
    }
}

impl Message {
    /// Builds a message of the variant named by its `role` field.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if the role is absent or unknown, or a field
    /// is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_message::message::domain::Message;
    /// use serde_json::json;
    ///
    /// let message = Message::from_value(&json!({
    ///     "role": "tool",
    ///     "tool_call_id": "call-1",
    ///     "content": "42"
    /// }))
    /// .expect("valid tool message");
    /// assert_eq!(message.as_tool().map(|m| m.tool_call_id()), Some("call-1"));
    /// ```
    pub fn from_value(value: &Value) -> MessageResult<Self> {
        DefaultMessageNormalizer::new().normalize_message(value)
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, Self::from_value)
    }
}

impl SystemMessage {
    /// Builds a system message from a JSON map.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` on invalid fields or a conflicting role.
    pub fn from_value(value: &Value) -> MessageResult<Self> {
        DefaultMessageNormalizer::new().normalize_system(value)
    }
}

impl<'de> Deserialize<'de> for SystemMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, Self::from_value)
    }
}

impl UserMessage {
    /// Builds a user message from a JSON map.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` on invalid fields or a conflicting role.
    pub fn from_value(value: &Value) -> MessageResult<Self> {
        DefaultMessageNormalizer::new().normalize_user(value)
    }
}

impl<'de> Deserialize<'de> for UserMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, Self::from_value)
    }
}

impl AssistantMessage {
    /// Builds an assistant message from a JSON map.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` on invalid fields, malformed tool calls or a
    /// conflicting role.
    pub fn from_value(value: &Value) -> MessageResult<Self> {
        DefaultMessageNormalizer::new().normalize_assistant(value)
    }
}

impl<'de> Deserialize<'de> for AssistantMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, Self::from_value)
    }
}

impl ToolMessage {
    /// Builds a tool message from a JSON map.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if `tool_call_id` is missing, on invalid
    /// fields or a conflicting role.
    pub fn from_value(value: &Value) -> MessageResult<Self> {
        DefaultMessageNormalizer::new().normalize_tool(value)
    }
}

impl<'de> Deserialize<'de> for ToolMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode(deserializer, Self::from_value)
    }
}
