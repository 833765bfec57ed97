//! Unit tests for message variants and their emptiness rules.

use super::fixtures::populated_assistant;
use crate::message::domain::{
    AssistantMessage, Content, Message, MessageContent, Role, SystemMessage, ToolCall,
    ToolMessage, UserMessage,
};
use rstest::rstest;

// ============================================================================
// Base emptiness tests
// ============================================================================

#[rstest]
#[case(None, true)]
#[case(Some(MessageContent::from("")), true)]
#[case(Some(MessageContent::Parts(vec![])), true)]
#[case(Some(MessageContent::from("hi")), false)]
#[case(Some(MessageContent::Parts(vec![Content::text("hi")])), false)]
fn base_emptiness_follows_content(#[case] content: Option<MessageContent>, #[case] expected: bool) {
    assert_eq!(UserMessage::from_content(content.clone()).is_empty(), expected);
    assert_eq!(SystemMessage::from_content(content).is_empty(), expected);
}

#[test]
fn user_message_with_null_content_is_empty() {
    assert!(UserMessage::empty().is_empty());
    assert!(!UserMessage::new("hi").is_empty());
}

// ============================================================================
// AssistantMessage tests
// ============================================================================

#[test]
fn assistant_without_content_or_tool_calls_is_empty() {
    let message = AssistantMessage::empty();
    assert!(message.is_empty());
    assert!(message.tool_calls().is_empty());
}

#[test]
fn assistant_with_tool_call_is_not_empty_without_content() {
    let message =
        AssistantMessage::empty().with_tool_call(ToolCall::function("call-1", "search", "{}"));
    assert!(message.content().is_none());
    assert!(!message.is_empty());
}

#[test]
fn assistant_with_content_is_not_empty_without_tool_calls() {
    assert!(!AssistantMessage::new("done").is_empty());
}

#[test]
fn assistant_tool_calls_are_not_shared_between_instances() {
    let first = AssistantMessage::empty().with_tool_call(ToolCall::function("a", "f", "{}"));
    let second = AssistantMessage::empty();
    assert_eq!(first.tool_calls().len(), 1);
    assert!(second.tool_calls().is_empty());
}

#[rstest]
fn assistant_preserves_tool_call_order(populated_assistant: AssistantMessage) {
    let ids: Vec<&str> = populated_assistant
        .tool_calls()
        .iter()
        .map(|call| call.id.as_str())
        .collect();
    assert_eq!(ids, ["call-1", "call-2"]);
}

// ============================================================================
// ToolMessage tests
// ============================================================================

#[rstest]
#[case("", None, true)]
#[case("call-1", None, false)]
#[case("", Some(MessageContent::from("result")), false)]
#[case("call-1", Some(MessageContent::from("result")), false)]
fn tool_message_emptiness(
    #[case] tool_call_id: &str,
    #[case] content: Option<MessageContent>,
    #[case] expected: bool,
) {
    let message = ToolMessage::from_content(tool_call_id, content);
    assert_eq!(message.is_empty(), expected);
}

#[test]
fn tool_message_accessors() {
    let message = ToolMessage::new("call-7", "sunny").with_name("weather");
    assert_eq!(message.tool_call_id(), "call-7");
    assert_eq!(message.name(), Some("weather"));
    assert_eq!(message.content().and_then(MessageContent::as_text), Some("sunny"));
}

// ============================================================================
// Role coupling tests
// ============================================================================

#[test]
fn every_variant_carries_its_canonical_role() {
    assert_eq!(SystemMessage::new("be brief").role(), Role::System);
    assert_eq!(UserMessage::new("hi").role(), Role::User);
    assert_eq!(AssistantMessage::new("hello").role(), Role::Assistant);
    assert_eq!(ToolMessage::new("call-1", "ok").role(), Role::Tool);
}

#[rstest]
#[case(SystemMessage::new("a").into(), Role::System)]
#[case(UserMessage::new("a").into(), Role::User)]
#[case(AssistantMessage::new("a").into(), Role::Assistant)]
#[case(ToolMessage::new("id", "a").into(), Role::Tool)]
fn message_role_matches_variant(#[case] message: Message, #[case] expected: Role) {
    assert_eq!(message.role(), expected);
}

// ============================================================================
// Message enum tests
// ============================================================================

#[rstest]
fn message_delegates_to_variant(populated_assistant: AssistantMessage) {
    let message = Message::from(populated_assistant.clone());
    assert_eq!(message.name(), Some("helper"));
    assert_eq!(message.content(), populated_assistant.content());
    assert_eq!(message.as_assistant(), Some(&populated_assistant));
    assert!(message.as_tool().is_none());
    assert!(!message.is_empty());
}

#[test]
fn message_is_empty_uses_variant_rule() {
    let tool: Message = ToolMessage::from_content("call-1", None).into();
    assert!(!tool.is_empty());
    let user: Message = UserMessage::empty().into();
    assert!(user.is_empty());
}
