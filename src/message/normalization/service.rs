//! Normalization service implementation.
//!
//! Provides the default implementation of the `MessageNormalizer` port,
//! combining the individual rules into per-variant message construction.

use crate::message::{
    domain::{
        AssistantMessage, Content, Message, MessageContent, Role, SystemMessage, ToolMessage,
        UserMessage,
    },
    error::{MessageError, MessageResult},
    normalization::rules::{self, Object, RawContent},
    ports::normalizer::{MessageNormalizer, NormalizationConfig},
};
use serde_json::Value;

/// Default implementation of the message normalizer.
///
/// Construction is fail-fast: the first invalid field aborts the message
/// being built.
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::Role;
/// use prompt_message::message::normalization::service::DefaultMessageNormalizer;
/// use prompt_message::message::ports::normalizer::MessageNormalizer;
/// use serde_json::json;
///
/// let normalizer = DefaultMessageNormalizer::new();
/// let message = normalizer
///     .normalize_message(&json!({"role": "user", "content": "Hello"}))
///     .expect("valid message");
/// assert_eq!(message.role(), Role::User);
/// assert!(!message.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessageNormalizer {
    config: NormalizationConfig,
}

struct BaseFields {
    content: Option<MessageContent>,
    name: Option<String>,
}

impl DefaultMessageNormalizer {
    /// Creates a normalizer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(NormalizationConfig::default())
    }

    /// Creates a normalizer with custom configuration.
    #[must_use]
    pub const fn with_config(config: NormalizationConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Normalizes a body assembled from typed and raw items.
    ///
    /// # Errors
    ///
    /// Returns `MessageError` if any retained raw item is invalid.
    pub fn normalize_raw_content(
        &self,
        raw: Option<RawContent>,
    ) -> MessageResult<Option<MessageContent>> {
        rules::normalize_raw_content(raw, self.config.unknown_content)
    }

    /// Normalizes an array of message maps, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Malformed` if `value` is not an array, or
    /// `MessageError::InvalidMessage` carrying the index and error of the
    /// first invalid message.
    pub fn normalize_messages(&self, value: &Value) -> MessageResult<Vec<Message>> {
        let items = value.as_array().ok_or_else(|| {
            MessageError::malformed(format!(
                "messages must be a JSON array, got {}",
                rules::json_type(value)
            ))
        })?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.normalize_message(item)
                    .map_err(|err| MessageError::at_index(index, err))
            })
            .collect()
    }

    fn begin<'a>(&self, value: &'a Value, role: Role) -> MessageResult<&'a Object> {
        let object = rules::as_object(value, role.as_str())?;
        rules::check_role(object, role, self.config.role_mismatch)?;
        Ok(object)
    }

    fn base_fields(&self, object: &Object, role: Role) -> MessageResult<BaseFields> {
        let content = match object.get("content") {
            Some(raw) => self.normalize_content(raw)?,
            None => None,
        };
        Ok(BaseFields {
            content,
            name: rules::optional_str(object, "name", role.as_str())?,
        })
    }
}

impl MessageNormalizer for DefaultMessageNormalizer {
    fn normalize_content_item(&self, value: &Value) -> MessageResult<Option<Content>> {
        rules::parse_content(value, self.config.unknown_content)
    }

    fn normalize_content(&self, value: &Value) -> MessageResult<Option<MessageContent>> {
        rules::normalize_content(value, self.config.unknown_content)
    }

    fn normalize_message(&self, value: &Value) -> MessageResult<Message> {
        let object = rules::as_object(value, "message")?;
        let role =
            rules::read_role(object)?.ok_or(MessageError::missing_field("role", "message"))?;
        let message = match role {
            Role::System => Message::System(self.normalize_system(value)?),
            Role::User => Message::User(self.normalize_user(value)?),
            Role::Assistant => Message::Assistant(self.normalize_assistant(value)?),
            Role::Tool => Message::Tool(self.normalize_tool(value)?),
        };
        Ok(message)
    }

    fn normalize_system(&self, value: &Value) -> MessageResult<SystemMessage> {
        let object = self.begin(value, Role::System)?;
        let base = self.base_fields(object, Role::System)?;
        let message = SystemMessage::from_content(base.content);
        Ok(match base.name {
            Some(name) => message.with_name(name),
            None => message,
        })
    }

    fn normalize_user(&self, value: &Value) -> MessageResult<UserMessage> {
        let object = self.begin(value, Role::User)?;
        let base = self.base_fields(object, Role::User)?;
        let message = UserMessage::from_content(base.content);
        Ok(match base.name {
            Some(name) => message.with_name(name),
            None => message,
        })
    }

    fn normalize_assistant(&self, value: &Value) -> MessageResult<AssistantMessage> {
        let object = self.begin(value, Role::Assistant)?;
        let base = self.base_fields(object, Role::Assistant)?;
        let tool_calls = rules::parse_tool_calls(object.get("tool_calls"))?;
        let message = AssistantMessage::from_content(base.content).with_tool_calls(tool_calls);
        Ok(match base.name {
            Some(name) => message.with_name(name),
            None => message,
        })
    }

    fn normalize_tool(&self, value: &Value) -> MessageResult<ToolMessage> {
        let object = self.begin(value, Role::Tool)?;
        let base = self.base_fields(object, Role::Tool)?;
        let tool_call_id = rules::required_str(object, "tool_call_id", Role::Tool.as_str())?;
        let message = ToolMessage::from_content(tool_call_id, base.content);
        Ok(match base.name {
            Some(name) => message.with_name(name),
            None => message,
        })
    }
}
