//! Domain types for prompt messages.
//!
//! This module contains pure value types with no dependency on how they are
//! parsed. All types are immutable after construction and serialisable via
//! serde; deserialisation is implemented in [`crate::message::normalization`].

mod content;
mod message;
mod role;
mod tool;

pub use content::{
    AudioContent, Content, ContentKind, DocumentContent, ImageContent, ImageDetail,
    MessageContent, MultiModal, ParseContentKindError, ParseImageDetailError, TextContent,
    VideoContent,
};
pub use message::{AssistantMessage, Message, SystemMessage, ToolMessage, UserMessage};
pub use role::{ParseRoleError, Role};
pub use tool::{FUNCTION_TOOL_TYPE, PromptFunction, PromptTool, ToolCall, ToolCallFunction};
