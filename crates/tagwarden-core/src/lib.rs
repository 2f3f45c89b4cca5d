//! TagWarden core: policy model, matching/planning, and error types.
//!
//! This crate defines the governance domain contracts shared by the service
//! and any embedding callers. It intentionally carries no transport or
//! runtime dependencies so the matching logic stays independently testable.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TagWardenError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{Result, TagWardenError};
