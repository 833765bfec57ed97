//! Content payloads carried by prompt messages.
//!
//! A message body is either a bare string or an ordered list of typed content
//! items. Each item is tagged on the wire by its `type` field:
//!
//! ```json
//! { "type": "text", "data": "Describe this picture." }
//! { "type": "image", "format": "png", "mime_type": "image/png", "base64_data": "...", "url": "", "detail": "low" }
//! ```

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};

/// Discriminant of a [`Content`] item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Plain text.
    Text,
    /// An image referenced by URL or inline base64 data.
    Image,
    /// An audio clip.
    Audio,
    /// A video clip.
    Video,
    /// A document such as a PDF.
    Document,
}

impl ContentKind {
    /// Returns the canonical wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Document => "document",
        }
    }

    /// Returns `true` for every kind except [`ContentKind::Text`].
    #[must_use]
    pub const fn is_multi_modal(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ContentKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid content kind: '{0}'")]
pub struct ParseContentKindError(pub String);

impl TryFrom<&str> for ContentKind {
    type Error = ParseContentKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            "document" => Ok(Self::Document),
            _ => Err(ParseContentKindError(value.to_owned())),
        }
    }
}

impl FromStr for ContentKind {
    type Err = ParseContentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// A single typed content item.
///
/// Serialises with a `type` tag. Deserialisation dispatches on that tag
/// explicitly; see [`crate::message::normalization::rules::parse_content`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// Plain text.
    Text(TextContent),
    /// An image.
    Image(ImageContent),
    /// An audio clip.
    Audio(AudioContent),
    /// A video clip.
    Video(VideoContent),
    /// A document.
    Document(DocumentContent),
}

impl Content {
    /// Creates a text content item.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(TextContent::new(data))
    }

    /// Returns the discriminant of this item.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Image(_) => ContentKind::Image,
            Self::Audio(_) => ContentKind::Audio,
            Self::Video(_) => ContentKind::Video,
            Self::Document(_) => ContentKind::Document,
        }
    }

    /// Returns the text if this is a text item.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&text.data),
            _ => None,
        }
    }

    /// Returns the multi-modal view of this item, or `None` for text.
    #[must_use]
    pub fn as_multi_modal(&self) -> Option<&dyn MultiModal> {
        match self {
            Self::Text(_) => None,
            Self::Image(image) => Some(image),
            Self::Audio(audio) => Some(audio),
            Self::Video(video) => Some(video),
            Self::Document(document) => Some(document),
        }
    }
}

impl From<TextContent> for Content {
    fn from(value: TextContent) -> Self {
        Self::Text(value)
    }
}

impl From<ImageContent> for Content {
    fn from(value: ImageContent) -> Self {
        Self::Image(value)
    }
}

impl From<AudioContent> for Content {
    fn from(value: AudioContent) -> Self {
        Self::Audio(value)
    }
}

impl From<VideoContent> for Content {
    fn from(value: VideoContent) -> Self {
        Self::Video(value)
    }
}

impl From<DocumentContent> for Content {
    fn from(value: DocumentContent) -> Self {
        Self::Document(value)
    }
}

/// Text content.
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::TextContent;
///
/// let text = TextContent::new("Hello!");
/// assert_eq!(text.data, "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    /// The text itself.
    pub data: String,
}

impl TextContent {
    /// Creates a text content item.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Accessors shared by every non-text content item.
///
/// A multi-modal payload is referenced either by `url` or by inline
/// `base64_data`; `url` wins when both are present.
pub trait MultiModal {
    /// The kind of payload.
    fn kind(&self) -> ContentKind;

    /// The file format, e.g. `png` or `mp3`.
    fn format(&self) -> &str;

    /// The MIME type of the payload.
    fn mime_type(&self) -> &str;

    /// Inline base64 data, empty when the payload is referenced by URL.
    fn base64_data(&self) -> &str;

    /// Remote location of the payload, empty when inlined.
    fn url(&self) -> &str;

    /// Returns the URL if set, otherwise a `data:` URI over the inline data.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_message::message::domain::{ImageContent, MultiModal};
    ///
    /// let image = ImageContent::from_base64("png", "image/png", "AAAA");
    /// assert_eq!(image.resolved_data(), "data:image/png;base64,AAAA");
    /// ```
    fn resolved_data(&self) -> Cow<'_, str> {
        let url = self.url();
        if url.is_empty() {
            Cow::Owned(format!(
                "data:{};base64,{}",
                self.mime_type(),
                self.base64_data()
            ))
        } else {
            Cow::Borrowed(url)
        }
    }
}

/// Level of detail a model should use when reading an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageDetail {
    /// Low-resolution processing.
    #[default]
    Low,
    /// High-resolution processing.
    High,
}

impl ImageDetail {
    /// Returns the canonical wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ImageDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name an [`ImageDetail`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid image detail: '{0}'")]
pub struct ParseImageDetailError(pub String);

impl TryFrom<&str> for ImageDetail {
    type Error = ParseImageDetailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            _ => Err(ParseImageDetailError(value.to_owned())),
        }
    }
}

/// Image content.
///
/// # Examples
///
/// ```
/// use prompt_message::message::domain::{ImageContent, ImageDetail, MultiModal};
///
/// let image = ImageContent::from_url("png", "image/png", "https://example.com/cat.png")
///     .with_detail(ImageDetail::High);
/// assert_eq!(image.resolved_data(), "https://example.com/cat.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageContent {
    /// The file format.
    pub format: String,
    /// Inline base64 data.
    pub base64_data: String,
    /// Remote location.
    pub url: String,
    /// The MIME type.
    pub mime_type: String,
    /// Requested processing detail.
    pub detail: ImageDetail,
}

impl ImageContent {
    /// Creates an image referenced by URL.
    #[must_use]
    pub fn from_url(
        format: impl Into<String>,
        mime_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            format: format.into(),
            base64_data: String::new(),
            url: url.into(),
            mime_type: mime_type.into(),
            detail: ImageDetail::default(),
        }
    }

    /// Creates an image from inline base64 data.
    #[must_use]
    pub fn from_base64(
        format: impl Into<String>,
        mime_type: impl Into<String>,
        base64_data: impl Into<String>,
    ) -> Self {
        Self {
            format: format.into(),
            base64_data: base64_data.into(),
            url: String::new(),
            mime_type: mime_type.into(),
            detail: ImageDetail::default(),
        }
    }

    /// Sets the processing detail.
    #[must_use]
    pub const fn with_detail(mut self, detail: ImageDetail) -> Self {
        self.detail = detail;
        self
    }
}

impl MultiModal for ImageContent {
    fn kind(&self) -> ContentKind {
        ContentKind::Image
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn base64_data(&self) -> &str {
        &self.base64_data
    }

    fn url(&self) -> &str {
        &self.url
    }
}

/// Declares a multi-modal content struct without image-specific fields.
macro_rules! media_content {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            /// The file format.
            pub format: String,
            /// Inline base64 data.
            pub base64_data: String,
            /// Remote location.
            pub url: String,
            /// The MIME type.
            pub mime_type: String,
        }

        impl $name {
            /// Creates a payload referenced by URL.
            #[must_use]
            pub fn from_url(
                format: impl Into<String>,
                mime_type: impl Into<String>,
                url: impl Into<String>,
            ) -> Self {
                Self {
                    format: format.into(),
                    base64_data: String::new(),
                    url: url.into(),
                    mime_type: mime_type.into(),
                }
            }

            /// Creates a payload from inline base64 data.
            #[must_use]
            pub fn from_base64(
                format: impl Into<String>,
                mime_type: impl Into<String>,
                base64_data: impl Into<String>,
            ) -> Self {
                Self {
                    format: format.into(),
                    base64_data: base64_data.into(),
                    url: String::new(),
                    mime_type: mime_type.into(),
                }
            }
        }

        impl MultiModal for $name {
            fn kind(&self) -> ContentKind {
                ContentKind::$kind
            }

            fn format(&self) -> &str {
                &self.format
            }

            fn mime_type(&self) -> &str {
                &self.mime_type
            }

            fn base64_data(&self) -> &str {
                &self.base64_data
            }

            fn url(&self) -> &str {
                &self.url
            }
        }
    };
}

media_content!(
    /// Audio content.
    AudioContent => Audio
);
media_content!(
    /// Video content.
    VideoContent => Video
);
media_content!(
    /// Document content.
    DocumentContent => Document
);

/// The body of a prompt message.
///
/// Serialises untagged: a bare string or an array of content items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// A bare string body.
    Text(String),
    /// An ordered list of typed items.
    Parts(Vec<Content>),
}

impl MessageContent {
    /// Returns `true` for an empty string or an empty item list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Parts(parts) => parts.is_empty(),
        }
    }

    /// Returns the bare string body, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Parts(_) => None,
        }
    }

    /// Returns the content items; a bare string body has none.
    #[must_use]
    pub fn parts(&self) -> &[Content] {
        match self {
            Self::Text(_) => &[],
            Self::Parts(parts) => parts,
        }
    }
}

impl From<String> for MessageContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for MessageContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<Content>> for MessageContent {
    fn from(value: Vec<Content>) -> Self {
        Self::Parts(value)
    }
}
