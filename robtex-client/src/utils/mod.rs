//! Utility modules.

/// Unix timestamp helpers.
pub mod datetime;

/// Incremental decoder for streams of concatenated JSON values.
pub(crate) mod json_stream;

/// Log sanitization utilities to prevent API key exposure.
pub(crate) mod log_sanitizer;

/// Serde helpers for loosely typed wire fields.
pub(crate) mod serde_ext;
