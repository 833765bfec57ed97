//! Prompt message: a typed model of conversation turns for LLM backends.
//!
//! This crate gives plugins and the host that brokers their model calls a
//! single, self-validating representation of prompt messages that can cross
//! a JSON boundary safely.
//!
//! # Modules
//!
//! - [`message`]: Roles, content payloads, message variants, tool calls and
//!   their normalization from untyped input

pub mod message;
