//! The tracked-field classification table.
//!
//! Every listing field the reapproval pipeline watches belongs to exactly
//! one group: structural fields always force manual reapproval, content
//! fields are auto-screened, and operational fields never block
//! publication. Fields not in the table are treated as operational.

use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Severity tier of a tracked field.
///
/// Serialized with the short tier codes (`"A"`, `"B"`, `"none"`) so stored
/// change records stay compatible with existing audit data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldTier {
    /// Structural change. Always requires full manual reapproval.
    #[serde(rename = "A")]
    Structural,
    /// Content change. Auto-screened; a failure escalates to review.
    #[serde(rename = "B")]
    Content,
    /// Operational change. Never blocks publication.
    #[serde(rename = "none")]
    Operational,
}

impl fmt::Display for FieldTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTier::Structural => write!(f, "A"),
            FieldTier::Content => write!(f, "B"),
            FieldTier::Operational => write!(f, "none"),
        }
    }
}

/// Structural fields: changes to what the service fundamentally is.
pub const STRUCTURAL_FIELDS: [&str; 4] = [
    "category",
    "pricingModel",
    "certifications",
    "serviceTypes",
];

/// Content fields: user-facing text and media.
pub const CONTENT_FIELDS: [&str; 5] = [
    "title",
    "description",
    "media",
    "subprojects",
    "faq",
];

/// Operational fields: tracked for the audit trail, never gate approval.
pub const OPERATIONAL_FIELDS: [&str; 4] = [
    "duration",
    "teamSize",
    "keywords",
    "scheduledExecutionEndDate",
];

/// The media field is gated rather than screened: automated text checks
/// can't judge images, so any media change goes to an admin.
pub const MEDIA_FIELD: &str = "media";

lazy_static! {
    static ref STRUCTURAL_SET: HashSet<&'static str> =
        STRUCTURAL_FIELDS.iter().copied().collect();
    static ref CONTENT_SET: HashSet<&'static str> =
        CONTENT_FIELDS.iter().copied().collect();
}

/// All tracked fields in table order: structural, then content, then
/// operational. Diff output follows this order.
pub fn tracked_fields() -> impl Iterator<Item = &'static str> {
    STRUCTURAL_FIELDS
        .iter()
        .chain(CONTENT_FIELDS.iter())
        .chain(OPERATIONAL_FIELDS.iter())
        .copied()
}

/// Classify a field name into its tier.
///
/// Dotted paths (`subprojects.0.name`) classify by their first segment, so
/// a nested change inherits the tier of its top-level field. Unknown
/// fields are operational.
pub fn classify_field(name: &str) -> FieldTier {
    let head = name.split('.').next().unwrap_or(name);
    if STRUCTURAL_SET.contains(head) {
        FieldTier::Structural
    } else if CONTENT_SET.contains(head) {
        FieldTier::Content
    } else {
        FieldTier::Operational
    }
}
