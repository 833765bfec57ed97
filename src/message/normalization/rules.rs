//! Individual normalization rules.
//!
//! Each rule is a pure function over borrowed JSON. Rules return the typed
//! value on success or a specific `MessageError` on failure; none of them
//! touch shared state.

use crate::message::{
    domain::{
        AudioContent, Content, ContentKind, DocumentContent, ImageContent, ImageDetail,
        MessageContent, Role, TextContent, ToolCall, ToolCallFunction, VideoContent,
    },
    error::{MessageError, MessageResult},
    ports::normalizer::{RoleMismatchPolicy, UnknownContentPolicy},
};
use serde_json::{Map, Value};

/// A JSON object.
pub type Object = Map<String, Value>;

const CONTENT_ITEM: &str = "content item";
const TOOL_CALL: &str = "tool_call";
const TOOL_CALL_FUNCTION: &str = "tool_call.function";
/// Tag reported for content items that carry no `type`.
pub(crate) const MISSING_TAG: &str = "<missing>";

/// A content item that is either already typed or still raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentInput {
    /// A typed item, passed through unchanged.
    Typed(Content),
    /// A raw map to be parsed by its `type` tag.
    Untyped(Value),
}

impl From<Content> for ContentInput {
    fn from(value: Content) -> Self {
        Self::Typed(value)
    }
}

impl From<Value> for ContentInput {
    fn from(value: Value) -> Self {
        Self::Untyped(value)
    }
}

/// A message body before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawContent {
    /// A bare string, kept verbatim.
    Text(String),
    /// A list of typed or raw items.
    Items(Vec<ContentInput>),
}

impl From<String> for RawContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RawContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<ContentInput>> for RawContent {
    fn from(value: Vec<ContentInput>) -> Self {
        Self::Items(value)
    }
}

impl From<Vec<Content>> for RawContent {
    fn from(value: Vec<Content>) -> Self {
        Self::Items(value.into_iter().map(ContentInput::Typed).collect())
    }
}

/// Returns a short name for the JSON type of `value`, for error messages.
#[must_use]
pub const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrows `value` as an object.
///
/// # Errors
///
/// Returns `MessageError::Malformed` if `value` is not a JSON object.
pub fn as_object<'a>(value: &'a Value, kind: &'static str) -> MessageResult<&'a Object> {
    value.as_object().ok_or_else(|| {
        MessageError::malformed(format!(
            "{kind} must be a JSON object, got {}",
            json_type(value)
        ))
    })
}

/// Reads a required string field. `null` counts as absent.
///
/// # Errors
///
/// Returns `MessageError::MissingField` if the field is absent, or
/// `MessageError::InvalidField` if it is not a string.
pub fn required_str(
    object: &Object,
    field: &'static str,
    kind: &'static str,
) -> MessageResult<String> {
    optional_str(object, field, kind)?.ok_or(MessageError::missing_field(field, kind))
}

/// Reads an optional string field. `null` counts as absent.
///
/// # Errors
///
/// Returns `MessageError::InvalidField` if the field is present but not a
/// string.
pub fn optional_str(
    object: &Object,
    field: &'static str,
    kind: &'static str,
) -> MessageResult<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(MessageError::invalid_field(
            field,
            kind,
            format!("expected a string, got {}", json_type(other)),
        )),
    }
}

struct MediaFields {
    format: String,
    base64_data: String,
    url: String,
    mime_type: String,
}

impl MediaFields {
    fn read(object: &Object, kind: ContentKind) -> MessageResult<Self> {
        let tag = kind.as_str();
        Ok(Self {
            format: required_str(object, "format", tag)?,
            base64_data: optional_str(object, "base64_data", tag)?.unwrap_or_default(),
            url: optional_str(object, "url", tag)?.unwrap_or_default(),
            mime_type: required_str(object, "mime_type", tag)?,
        })
    }
}

fn read_detail(object: &Object) -> MessageResult<ImageDetail> {
    optional_str(object, "detail", ContentKind::Image.as_str())?
        .map_or(Ok(ImageDetail::default()), |detail| {
            ImageDetail::try_from(detail.as_str()).map_err(MessageError::from)
        })
}

/// Builds the content variant for a known `kind` from the remaining fields.
///
/// # Errors
///
/// Returns `MessageError::MissingField` or `MessageError::InvalidField` when
/// the object does not satisfy the variant's schema.
pub fn build_content(object: &Object, kind: ContentKind) -> MessageResult<Content> {
    let content = match kind {
        ContentKind::Text => Content::Text(TextContent::new(required_str(
            object,
            "data",
            kind.as_str(),
        )?)),
        ContentKind::Image => {
            let media = MediaFields::read(object, kind)?;
            Content::Image(ImageContent {
                format: media.format,
                base64_data: media.base64_data,
                url: media.url,
                mime_type: media.mime_type,
                detail: read_detail(object)?,
            })
        }
        ContentKind::Audio => {
            let media = MediaFields::read(object, kind)?;
            Content::Audio(AudioContent {
                format: media.format,
                base64_data: media.base64_data,
                url: media.url,
                mime_type: media.mime_type,
            })
        }
        ContentKind::Video => {
            let media = MediaFields::read(object, kind)?;
            Content::Video(VideoContent {
                format: media.format,
                base64_data: media.base64_data,
                url: media.url,
                mime_type: media.mime_type,
            })
        }
        ContentKind::Document => {
            let media = MediaFields::read(object, kind)?;
            Content::Document(DocumentContent {
                format: media.format,
                base64_data: media.base64_data,
                url: media.url,
                mime_type: media.mime_type,
            })
        }
    };
    Ok(content)
}

fn unknown_kind(tag: String, policy: UnknownContentPolicy) -> MessageResult<Option<Content>> {
    match policy {
        UnknownContentPolicy::Drop => Ok(None),
        UnknownContentPolicy::Reject => Err(MessageError::UnknownContentKind(tag)),
    }
}

/// Parses one content item, dispatching on its `type` tag.
///
/// The tag is read first; the rest of the object is then decoded against the
/// matching variant. Items whose tag is absent or unrecognised yield
/// `Ok(None)` under [`UnknownContentPolicy::Drop`].
///
/// # Errors
///
/// Returns `MessageError` if the item is not an object, if a known variant
/// is missing a required field, or if an unknown tag is rejected by policy.
///
/// # Examples
///
/// ```
/// use prompt_message::message::normalization::rules::parse_content;
/// use prompt_message::message::ports::normalizer::UnknownContentPolicy;
/// use serde_json::json;
///
/// let item = json!({"type": "text", "data": "hello"});
/// let content = parse_content(&item, UnknownContentPolicy::Drop)
///     .expect("valid item")
///     .expect("known kind");
/// assert_eq!(content.as_text(), Some("hello"));
///
/// let bogus = json!({"type": "bogus"});
/// assert_eq!(parse_content(&bogus, UnknownContentPolicy::Drop), Ok(None));
/// ```
pub fn parse_content(
    value: &Value,
    policy: UnknownContentPolicy,
) -> MessageResult<Option<Content>> {
    let object = as_object(value, CONTENT_ITEM)?;
    match object.get("type") {
        Some(Value::String(tag)) => match ContentKind::try_from(tag.as_str()) {
            Ok(kind) => build_content(object, kind).map(Some),
            Err(err) => unknown_kind(err.0, policy),
        },
        None | Some(Value::Null) => unknown_kind(MISSING_TAG.to_owned(), policy),
        Some(other) => unknown_kind(other.to_string(), policy),
    }
}

/// Parses a typed-or-raw item; typed items are returned unchanged.
///
/// # Errors
///
/// Propagates errors from [`parse_content`] for raw items.
pub fn parse_content_input(
    input: ContentInput,
    policy: UnknownContentPolicy,
) -> MessageResult<Option<Content>> {
    match input {
        ContentInput::Typed(content) => Ok(Some(content)),
        ContentInput::Untyped(value) => parse_content(&value, policy),
    }
}

pub(crate) fn describe_tag(value: &Value) -> String {
    match value.get("type") {
        Some(Value::String(tag)) => tag.clone(),
        None | Some(Value::Null) => MISSING_TAG.to_owned(),
        Some(other) => other.to_string(),
    }
}

fn push_parsed(
    parts: &mut Vec<Content>,
    index: usize,
    item: ContentInput,
    policy: UnknownContentPolicy,
) -> MessageResult<()> {
    let kind = match &item {
        ContentInput::Typed(_) => None,
        ContentInput::Untyped(value) => Some(describe_tag(value)),
    };
    match parse_content_input(item, policy)? {
        Some(content) => parts.push(content),
        None => tracing::debug!(
            index,
            kind = kind.as_deref().unwrap_or(MISSING_TAG),
            "dropping content item with unrecognised type"
        ),
    }
    Ok(())
}

/// Normalizes a raw JSON message body.
///
/// - a string is returned verbatim;
/// - `null` becomes `None`;
/// - an array is parsed item by item, preserving order and dropping unknown
///   kinds under [`UnknownContentPolicy::Drop`].
///
/// # Errors
///
/// Returns `MessageError::InvalidField` for any other JSON type, and
/// propagates item errors from [`parse_content`].
pub fn normalize_content(
    value: &Value,
    policy: UnknownContentPolicy,
) -> MessageResult<Option<MessageContent>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(MessageContent::Text(text.clone()))),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                push_parsed(&mut parts, index, ContentInput::Untyped(item.clone()), policy)?;
            }
            Ok(Some(MessageContent::Parts(parts)))
        }
        other => Err(MessageError::invalid_field(
            "content",
            "message",
            format!("expected a string, an array or null, got {}", json_type(other)),
        )),
    }
}

/// Normalizes a body built from typed and raw items.
///
/// Follows the same rules as [`normalize_content`]; typed items pass
/// through unchanged.
///
/// # Errors
///
/// Propagates item errors from [`parse_content`].
pub fn normalize_raw_content(
    raw: Option<RawContent>,
    policy: UnknownContentPolicy,
) -> MessageResult<Option<MessageContent>> {
    let Some(raw_content) = raw else {
        return Ok(None);
    };
    match raw_content {
        RawContent::Text(text) => Ok(Some(MessageContent::Text(text))),
        RawContent::Items(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                push_parsed(&mut parts, index, item, policy)?;
            }
            Ok(Some(MessageContent::Parts(parts)))
        }
    }
}

/// Coerces a tool call id to a string.
///
/// Strings are returned unchanged; numbers and booleans use their JSON
/// textual form.
///
/// # Errors
///
/// Returns `MessageError::MissingField` for `null` and
/// `MessageError::InvalidToolCallId` for arrays and objects.
///
/// # Examples
///
/// ```
/// use prompt_message::message::normalization::rules::coerce_tool_call_id;
/// use serde_json::json;
///
/// assert_eq!(coerce_tool_call_id(&json!(42)), Ok("42".to_owned()));
/// assert_eq!(coerce_tool_call_id(&json!("abc")), Ok("abc".to_owned()));
/// ```
pub fn coerce_tool_call_id(value: &Value) -> MessageResult<String> {
    match value {
        Value::String(id) => Ok(id.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Err(MessageError::missing_field("id", TOOL_CALL)),
        Value::Array(_) | Value::Object(_) => {
            Err(MessageError::InvalidToolCallId(json_type(value).to_owned()))
        }
    }
}

/// Parses one tool call record.
///
/// # Errors
///
/// Returns `MessageError` if the record or its `function` is not an object,
/// if a required field is absent, or if the id cannot be coerced.
pub fn parse_tool_call(value: &Value) -> MessageResult<ToolCall> {
    let object = as_object(value, TOOL_CALL)?;
    let id = object
        .get("id")
        .ok_or(MessageError::missing_field("id", TOOL_CALL))
        .and_then(coerce_tool_call_id)?;
    let kind = required_str(object, "type", TOOL_CALL)?;
    let function_value = object
        .get("function")
        .ok_or(MessageError::missing_field("function", TOOL_CALL))?;
    let function = as_object(function_value, TOOL_CALL_FUNCTION)?;

    Ok(ToolCall::new(
        id,
        kind,
        ToolCallFunction::new(
            required_str(function, "name", TOOL_CALL_FUNCTION)?,
            required_str(function, "arguments", TOOL_CALL_FUNCTION)?,
        ),
    ))
}

/// Parses the optional `tool_calls` list of an assistant message.
///
/// An absent or `null` list yields a fresh empty `Vec`.
///
/// # Errors
///
/// Returns `MessageError::InvalidField` if the value is not an array, and
/// propagates errors from [`parse_tool_call`].
pub fn parse_tool_calls(value: Option<&Value>) -> MessageResult<Vec<ToolCall>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(parse_tool_call).collect(),
        Some(other) => Err(MessageError::invalid_field(
            "tool_calls",
            Role::Assistant.as_str(),
            format!("expected an array, got {}", json_type(other)),
        )),
    }
}

/// Reads the `role` field, if present.
///
/// # Errors
///
/// Returns `MessageError::InvalidRole` for an unknown role string and
/// `MessageError::InvalidField` for a non-string value.
pub fn read_role(object: &Object) -> MessageResult<Option<Role>> {
    optional_str(object, "role", "message")?
        .map(|role| Role::try_from(role.as_str()).map_err(MessageError::from))
        .transpose()
}

/// Checks the input role against the variant being built.
///
/// An absent role is always accepted.
///
/// # Errors
///
/// Returns `MessageError::RoleMismatch` when the roles differ and the policy
/// is [`RoleMismatchPolicy::Reject`], and propagates [`read_role`] errors.
pub fn check_role(
    object: &Object,
    expected: Role,
    policy: RoleMismatchPolicy,
) -> MessageResult<()> {
    match read_role(object)? {
        Some(actual) if actual != expected => match policy {
            RoleMismatchPolicy::Reject => Err(MessageError::RoleMismatch { expected, actual }),
            RoleMismatchPolicy::Canonicalize => {
                tracing::debug!(%expected, %actual, "replacing conflicting role");
                Ok(())
            }
        },
        _ => Ok(()),
    }
}
