//! Conversation roles.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The role of a prompt message within a conversation.
///
/// The set is closed: parsing any string other than the four canonical
/// values fails with [`ParseRoleError`].
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::Role;
///
/// let role = Role::try_from("assistant").expect("canonical role");
/// assert_eq!(role, Role::Assistant);
/// assert_eq!(role.to_string(), "assistant");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Instructions framing the conversation.
    System,
    /// Input from the end user.
    User,
    /// Output produced by the model.
    Assistant,
    /// The result of a tool invocation.
    Tool,
}

impl Role {
    /// All roles, in canonical order.
    pub const ALL: [Self; 4] = [Self::System, Self::User, Self::Assistant, Self::Tool];

    /// Returns the canonical wire string for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Tool => "tool",
        }
    }

    /// Returns `true` if messages with this role may carry tool calls.
    #[must_use]
    pub const fn can_call_tools(self) -> bool {
        matches!(self, Self::Assistant)
    }

    /// Returns `true` for the system role.
    #[must_use]
    pub const fn is_system(self) -> bool {
        matches!(self, Self::System)
    }

    /// Returns `true` for the tool role.
    #[must_use]
    pub const fn is_tool(self) -> bool {
        matches!(self, Self::Tool)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: '{0}'")]
pub struct ParseRoleError(pub String);

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            "tool" => Ok(Self::Tool),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
