//! Prompt message variants.
//!
//! Each variant stores its role privately and only its constructors set it,
//! so a typed value can never carry a role belonging to another variant.

use super::{MessageContent, Role, ToolCall};
use serde::Serialize;

fn content_is_empty(content: Option<&MessageContent>) -> bool {
    content.is_none_or(MessageContent::is_empty)
}

/// A prompt message of any kind.
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::{AssistantMessage, Message, Role, ToolCall};
///
/// let message: Message = AssistantMessage::empty()
///     .with_tool_call(ToolCall::function("call-1", "search", "{}"))
///     .into();
/// assert_eq!(message.role(), Role::Assistant);
/// assert!(!message.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// A system instruction.
    System(SystemMessage),
    /// A user turn.
    User(UserMessage),
    /// A model turn, possibly with tool calls.
    Assistant(AssistantMessage),
    /// A tool result.
    Tool(ToolMessage),
}

impl Message {
    /// Returns the role of the wrapped variant.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::System(_) => Role::System,
            Self::User(_) => Role::User,
            Self::Assistant(_) => Role::Assistant,
            Self::Tool(_) => Role::Tool,
        }
    }

    /// Returns the message body, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&MessageContent> {
        match self {
            Self::System(message) => message.content(),
            Self::User(message) => message.content(),
            Self::Assistant(message) => message.content(),
            Self::Tool(message) => message.content(),
        }
    }

    /// Returns the optional participant name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::System(message) => message.name(),
            Self::User(message) => message.name(),
            Self::Assistant(message) => message.name(),
            Self::Tool(message) => message.name(),
        }
    }

    /// Returns `true` if the message carries nothing a model could act on.
    ///
    /// Delegates to the variant's own rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::System(message) => message.is_empty(),
            Self::User(message) => message.is_empty(),
            Self::Assistant(message) => message.is_empty(),
            Self::Tool(message) => message.is_empty(),
        }
    }

    /// Returns the assistant variant, if this is one.
    #[must_use]
    pub const fn as_assistant(&self) -> Option<&AssistantMessage> {
        match self {
            Self::Assistant(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the tool variant, if this is one.
    #[must_use]
    pub const fn as_tool(&self) -> Option<&ToolMessage> {
        match self {
            Self::Tool(message) => Some(message),
            _ => None,
        }
    }
}

impl From<SystemMessage> for Message {
    fn from(value: SystemMessage) -> Self {
        Self::System(value)
    }
}

impl From<UserMessage> for Message {
    fn from(value: UserMessage) -> Self {
        Self::User(value)
    }
}

impl From<AssistantMessage> for Message {
    fn from(value: AssistantMessage) -> Self {
        Self::Assistant(value)
    }
}

impl From<ToolMessage> for Message {
    fn from(value: ToolMessage) -> Self {
        Self::Tool(value)
    }
}

/// A system instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemMessage {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl SystemMessage {
    /// Creates a system message with the given body.
    #[must_use]
    pub fn new(content: impl Into<MessageContent>) -> Self {
        Self::from_content(Some(content.into()))
    }

    /// Creates a system message with no body.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_content(None)
    }

    /// Creates a system message from an optional body.
    #[must_use]
    pub const fn from_content(content: Option<MessageContent>) -> Self {
        Self {
            role: Role::System,
            content,
            name: None,
        }
    }

    /// Sets the participant name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Always [`Role::System`].
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&MessageContent> {
        self.content.as_ref()
    }

    /// Returns the participant name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` when the body is absent, an empty string or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        content_is_empty(self.content.as_ref())
    }
}

/// A user turn.
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::UserMessage;
///
/// assert!(UserMessage::empty().is_empty());
/// assert!(!UserMessage::new("hi").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl UserMessage {
    /// Creates a user message with the given body.
    #[must_use]
    pub fn new(content: impl Into<MessageContent>) -> Self {
        Self::from_content(Some(content.into()))
    }

    /// Creates a user message with no body.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_content(None)
    }

    /// Creates a user message from an optional body.
    #[must_use]
    pub const fn from_content(content: Option<MessageContent>) -> Self {
        Self {
            role: Role::User,
            content,
            name: None,
        }
    }

    /// Sets the participant name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Always [`Role::User`].
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&MessageContent> {
        self.content.as_ref()
    }

    /// Returns the participant name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` when the body is absent, an empty string or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        content_is_empty(self.content.as_ref())
    }
}

/// A model turn.
///
/// Every instance owns its own tool-call list; [`AssistantMessage::empty`]
/// starts from a fresh `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantMessage {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    tool_calls: Vec<ToolCall>,
}

impl AssistantMessage {
    /// Creates an assistant message with the given body and no tool calls.
    #[must_use]
    pub fn new(content: impl Into<MessageContent>) -> Self {
        Self::from_content(Some(content.into()))
    }

    /// Creates an assistant message with no body and no tool calls.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_content(None)
    }

    /// Creates an assistant message from an optional body.
    #[must_use]
    pub const fn from_content(content: Option<MessageContent>) -> Self {
        Self {
            role: Role::Assistant,
            content,
            name: None,
            tool_calls: Vec::new(),
        }
    }

    /// Sets the participant name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a tool call.
    #[must_use]
    pub fn with_tool_call(mut self, tool_call: ToolCall) -> Self {
        self.tool_calls.push(tool_call);
        self
    }

    /// Appends several tool calls, preserving their order.
    #[must_use]
    pub fn with_tool_calls(mut self, tool_calls: impl IntoIterator<Item = ToolCall>) -> Self {
        self.tool_calls.extend(tool_calls);
        self
    }

    /// Always [`Role::Assistant`].
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&MessageContent> {
        self.content.as_ref()
    }

    /// Returns the participant name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the requested tool calls in order.
    #[must_use]
    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.tool_calls
    }

    /// Returns `true` only when the body is empty and there are no tool calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_message::message::domain::{AssistantMessage, ToolCall};
    ///
    /// assert!(AssistantMessage::empty().is_empty());
    /// let calling = AssistantMessage::empty()
    ///     .with_tool_call(ToolCall::function("call-1", "search", "{}"));
    /// assert!(!calling.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        content_is_empty(self.content.as_ref()) && self.tool_calls.is_empty()
    }
}

/// The result of a tool call, linked back by `tool_call_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolMessage {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    tool_call_id: String,
}

impl ToolMessage {
    /// Creates a tool message answering `tool_call_id`.
    #[must_use]
    pub fn new(tool_call_id: impl Into<String>, content: impl Into<MessageContent>) -> Self {
        Self::from_content(tool_call_id, Some(content.into()))
    }

    /// Creates a tool message from an optional body.
    #[must_use]
    pub fn from_content(tool_call_id: impl Into<String>, content: Option<MessageContent>) -> Self {
        Self {
            role: Role::Tool,
            content,
            name: None,
            tool_call_id: tool_call_id.into(),
        }
    }

    /// Sets the participant name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Always [`Role::Tool`].
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&MessageContent> {
        self.content.as_ref()
    }

    /// Returns the participant name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the id of the tool call this message answers.
    #[must_use]
    pub fn tool_call_id(&self) -> &str {
        &self.tool_call_id
    }

    /// Returns `true` only when the body is empty and `tool_call_id` is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        content_is_empty(self.content.as_ref()) && self.tool_call_id.is_empty()
    }
}
