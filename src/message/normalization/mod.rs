//! Message normalization implementation.
//!
//! Converts loosely-typed JSON into the typed domain values: individual
//! rules, the composite normalizer service, and the serde glue built on top
//! of them.

pub mod rules;
mod serde_impl;
pub mod service;

pub use rules::{ContentInput, RawContent};
pub use service::DefaultMessageNormalizer;
