//! Port definitions for the message subsystem.
//!
//! Ports are the trait seams between loosely-typed callers and the typed
//! domain.

pub mod normalizer;
