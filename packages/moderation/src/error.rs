//! Error types for the moderation library.
//!
//! Library errors use `thiserror` so callers can match on failure modes.
//! The diffing and screening operations themselves never fail: malformed
//! input degrades to a passing result or an empty change list. The only
//! fallible surface is converting a rich record into a plain snapshot.

use thiserror::Error;

/// Errors surfaced by the moderation library.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// A record could not be serialized into plain data.
    #[error("snapshot conversion failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A record serialized to something other than an object.
    #[error("snapshot source must serialize to an object, got {kind}")]
    NotAnObject {
        /// What the source actually serialized to.
        kind: &'static str,
    },
}

/// Result type for moderation operations.
pub type Result<T> = std::result::Result<T, ModerationError>;
