//! Tool invocation records and tool definitions.
//!
//! [`ToolCall`] is emitted by an assistant turn and answered by a tool
//! message carrying the same id. [`PromptTool`] describes a function the
//! model is allowed to call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `type` value used for function tool calls.
pub const FUNCTION_TOOL_TYPE: &str = "function";

/// A function invocation requested by the assistant.
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::ToolCall;
///
/// let call = ToolCall::function("call-1", "get_weather", r#"{"city":"Oslo"}"#);
/// assert_eq!(call.kind, "function");
/// assert_eq!(call.function.name, "get_weather");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCall {
    /// Identifier matched by the answering tool message.
    pub id: String,
    /// The call type, usually `"function"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The function being invoked.
    pub function: ToolCallFunction,
}

impl ToolCall {
    /// Creates a tool call with an explicit type.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>, function: ToolCallFunction) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            function,
        }
    }

    /// Creates a `"function"` tool call.
    #[must_use]
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            FUNCTION_TOOL_TYPE,
            ToolCallFunction::new(name, arguments),
        )
    }
}

/// The function half of a [`ToolCall`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallFunction {
    /// The function name.
    pub name: String,
    /// Arguments as a JSON-encoded string, exactly as the model produced them.
    pub arguments: String,
}

impl ToolCallFunction {
    /// Creates a function reference.
    #[must_use]
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// A tool the model may call, described by a JSON schema.
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::PromptTool;
/// use serde_json::json;
///
/// let tool = PromptTool::new("get_weather", "Look up the weather")
///     .with_parameter_schema(json!({"type": "object"}))
///     .expect("schema is an object");
/// assert_eq!(tool.parameters.get("type"), Some(&json!("object")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTool {
    /// The function name.
    pub name: String,
    /// What the function does.
    pub description: String,
    /// JSON schema of the arguments.
    pub parameters: Map<String, Value>,
}

impl PromptTool {
    /// Creates a tool with an empty parameter schema.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Map::new(),
        }
    }

    /// Replaces the parameter schema.
    ///
    /// Returns `None` when `schema` is not a JSON object.
    #[must_use]
    pub fn with_parameter_schema(mut self, schema: Value) -> Option<Self> {
        match schema {
            Value::Object(parameters) => {
                self.parameters = parameters;
                Some(self)
            }
            _ => None,
        }
    }
}

/// A [`PromptTool`] wrapped in its typed envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptFunction {
    /// The tool type, `"function"` unless stated otherwise.
    #[serde(rename = "type", default = "default_tool_type")]
    pub kind: String,
    /// The tool definition.
    pub function: PromptTool,
}

fn default_tool_type() -> String {
    FUNCTION_TOOL_TYPE.to_owned()
}

impl PromptFunction {
    /// Wraps a tool as a `"function"` tool.
    #[must_use]
    pub fn new(function: PromptTool) -> Self {
        Self {
            kind: default_tool_type(),
            function,
        }
    }
}

impl From<PromptTool> for PromptFunction {
    fn from(value: PromptTool) -> Self {
        Self::new(value)
    }
}
