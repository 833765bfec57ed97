//! Unit tests for content payload types.

use crate::message::domain::{
    AudioContent, Content, ContentKind, DocumentContent, ImageContent, ImageDetail,
    MessageContent, MultiModal, TextContent, VideoContent,
};
use rstest::rstest;

// ============================================================================
// ContentKind tests
// ============================================================================

#[rstest]
#[case("text", ContentKind::Text)]
#[case("image", ContentKind::Image)]
#[case("audio", ContentKind::Audio)]
#[case("video", ContentKind::Video)]
#[case("document", ContentKind::Document)]
fn content_kind_parses_canonical_tags(#[case] tag: &str, #[case] expected: ContentKind) {
    assert_eq!(ContentKind::try_from(tag), Ok(expected));
    assert_eq!(expected.as_str(), tag);
}

#[rstest]
#[case("bogus")]
#[case("Image")]
#[case("")]
fn content_kind_rejects_unknown_tags(#[case] tag: &str) {
    assert!(ContentKind::try_from(tag).is_err());
}

#[test]
fn only_text_is_not_multi_modal() {
    assert!(!ContentKind::Text.is_multi_modal());
    assert!(ContentKind::Image.is_multi_modal());
    assert!(ContentKind::Document.is_multi_modal());
}

// ============================================================================
// Content tests
// ============================================================================

#[rstest]
#[case(Content::text("hi"), ContentKind::Text)]
#[case(ImageContent::from_url("png", "image/png", "http://x/y.png").into(), ContentKind::Image)]
#[case(AudioContent::from_base64("mp3", "audio/mpeg", "AAAA").into(), ContentKind::Audio)]
#[case(VideoContent::from_url("mp4", "video/mp4", "http://x/v.mp4").into(), ContentKind::Video)]
#[case(
    DocumentContent::from_base64("pdf", "application/pdf", "JVBE").into(),
    ContentKind::Document
)]
fn content_kind_matches_variant(#[case] content: Content, #[case] expected: ContentKind) {
    assert_eq!(content.kind(), expected);
    assert_eq!(content.as_multi_modal().is_some(), expected.is_multi_modal());
}

#[test]
fn as_text_only_returns_text_items() {
    assert_eq!(Content::text("hello").as_text(), Some("hello"));
    let image: Content = ImageContent::from_url("png", "image/png", "http://x/y.png").into();
    assert_eq!(image.as_text(), None);
}

#[test]
fn text_content_from_into() {
    let content: Content = TextContent::new("abc").into();
    assert_eq!(content, Content::text("abc"));
}

// ============================================================================
// resolved_data tests
// ============================================================================

#[test]
fn resolved_data_builds_data_uri_without_url() {
    let image = ImageContent::from_base64("png", "image/png", "AAAA");
    assert_eq!(image.resolved_data(), "data:image/png;base64,AAAA");
}

#[rstest]
#[case("")]
#[case("AAAA")]
fn resolved_data_prefers_url(#[case] base64_data: &str) {
    let image = ImageContent {
        base64_data: base64_data.to_owned(),
        ..ImageContent::from_url("png", "image/png", "http://x/y.png")
    };
    assert_eq!(image.resolved_data(), "http://x/y.png");
}

#[rstest]
#[case(AudioContent::from_base64("wav", "audio/wav", "UklG").into(), "data:audio/wav;base64,UklG")]
#[case(VideoContent::from_base64("mp4", "video/mp4", "AAAA").into(), "data:video/mp4;base64,AAAA")]
#[case(
    DocumentContent::from_url("pdf", "application/pdf", "https://d/x.pdf").into(),
    "https://d/x.pdf"
)]
fn resolved_data_is_shared_by_all_multi_modal_kinds(
    #[case] content: Content,
    #[case] expected: &str,
) {
    let media = content.as_multi_modal().expect("multi-modal content");
    assert_eq!(media.resolved_data(), expected);
}

#[test]
fn resolved_data_with_empty_payload_is_bare_data_uri() {
    let audio = AudioContent::from_base64("mp3", "audio/mpeg", "");
    assert_eq!(audio.resolved_data(), "data:audio/mpeg;base64,");
}

// ============================================================================
// ImageDetail tests
// ============================================================================

#[test]
fn image_detail_defaults_to_low() {
    assert_eq!(ImageDetail::default(), ImageDetail::Low);
    let image = ImageContent::from_url("png", "image/png", "http://x/y.png");
    assert_eq!(image.detail, ImageDetail::Low);
}

#[rstest]
#[case("low", Some(ImageDetail::Low))]
#[case("high", Some(ImageDetail::High))]
#[case("auto", None)]
fn image_detail_parse(#[case] input: &str, #[case] expected: Option<ImageDetail>) {
    assert_eq!(ImageDetail::try_from(input).ok(), expected);
}

// ============================================================================
// MessageContent tests
// ============================================================================

#[rstest]
#[case(MessageContent::from(""), true)]
#[case(MessageContent::from("hi"), false)]
#[case(MessageContent::Parts(vec![]), true)]
#[case(MessageContent::Parts(vec![Content::text("")]), false)]
fn message_content_is_empty(#[case] content: MessageContent, #[case] expected: bool) {
    assert_eq!(content.is_empty(), expected);
}

#[test]
fn message_content_accessors() {
    let text = MessageContent::from("hello");
    assert_eq!(text.as_text(), Some("hello"));
    assert!(text.parts().is_empty());

    let parts = MessageContent::from(vec![Content::text("a"), Content::text("b")]);
    assert_eq!(parts.as_text(), None);
    assert_eq!(parts.parts().len(), 2);
}
