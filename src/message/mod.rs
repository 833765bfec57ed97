//! Typed prompt messages exchanged with language-model backends.
//!
//! This module implements the message types, their normalization from
//! untyped input, and the JSON wire shape.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types ([`domain::Message`], [`domain::Role`],
//!   [`domain::Content`], etc.)
//! - **Ports**: The [`ports::normalizer::MessageNormalizer`] seam and its configuration
//! - **Normalization**: Rules and the default normalizer that turn maps into domain values
//!
//! # Example
//!
//! ```
//! use prompt_message::message::domain::{Content, ImageContent, Message, UserMessage};
//!
//! let message: Message = UserMessage::new(vec![
//!     Content::text("What is in this picture?"),
//!     ImageContent::from_url("png", "image/png", "https://example.com/cat.png").into(),
//! ])
//! .into();
//!
//! let wire = serde_json::to_value(&message).expect("serialise");
//! let back: Message = serde_json::from_value(wire).expect("deserialise");
//! assert_eq!(back, message);
//! ```

pub mod domain;
pub mod error;
pub mod normalization;
pub mod ports;

#[cfg(test)]
mod tests;
