//! Reducing a change list to a reapproval verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diff::ChangeEntry;
use crate::fields::FieldTier;

/// Overall reapproval outcome for one edited listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReapprovalVerdict {
    /// At least one structural change: full manual reapproval.
    #[serde(rename = "full")]
    Full,
    /// No structural change, but a content change failed screening.
    #[serde(rename = "moderation_failed")]
    ModerationFailed,
    /// Nothing blocks publication: no changes, operational changes only,
    /// or content changes that all passed screening.
    #[serde(rename = "none")]
    NotRequired,
}

impl fmt::Display for ReapprovalVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReapprovalVerdict::Full => write!(f, "full"),
            ReapprovalVerdict::ModerationFailed => write!(f, "moderation_failed"),
            ReapprovalVerdict::NotRequired => write!(f, "none"),
        }
    }
}

/// Reduce a change list to its verdict.
///
/// Strict precedence: a structural change beats a failed content change
/// beats everything harmless. The verdict is always recomputed from the
/// entries, never stored alongside them.
pub fn decide_reapproval(entries: &[ChangeEntry]) -> ReapprovalVerdict {
    if entries
        .iter()
        .any(|entry| entry.category == FieldTier::Structural)
    {
        return ReapprovalVerdict::Full;
    }

    if entries
        .iter()
        .any(|entry| entry.category == FieldTier::Content && entry.failed_moderation())
    {
        return ReapprovalVerdict::ModerationFailed;
    }

    ReapprovalVerdict::NotRequired
}
