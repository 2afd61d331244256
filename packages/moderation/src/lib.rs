//! Change classification and moderation gating for listing revisions.
//!
//! Given the previously approved snapshot of a marketplace listing and its
//! current edited state, this library determines which tracked fields
//! changed, classifies each change by severity tier, screens content-tier
//! changes for inappropriate language and submitter self-promotion, and
//! reduces the whole edit to a single reapproval verdict.
//!
//! The three tiers:
//!
//! - **Structural** (`"A"`): what the service fundamentally is. Any change
//!   forces full manual reapproval.
//! - **Content** (`"B"`): user-facing text and media. Changes are screened
//!   automatically; a failure escalates to review.
//! - **Operational** (`"none"`): scheduling and discovery metadata.
//!   Changes publish without review.
//!
//! Everything here is synchronous and side-effect free. Persisting change
//! records, routing listings to review queues, and notifying people are
//! the caller's concern.
//!
//! # Example
//!
//! ```
//! use moderation::{decide_reapproval, diff_snapshots, DiffOptions, ReapprovalVerdict, Snapshot};
//! use serde_json::json;
//!
//! let approved = Snapshot::from_value(json!({
//!     "title": "Gutter cleaning",
//!     "keywords": ["gutters"],
//! }));
//! let edited = Snapshot::from_value(json!({
//!     "title": "Gutter cleaning and repair",
//!     "keywords": ["gutters", "repair"],
//! }));
//!
//! let options = DiffOptions::new().with_submitter_name("Acme Corp");
//! let changes = diff_snapshots(&approved, &edited, &options);
//!
//! assert_eq!(changes.len(), 2);
//! assert_eq!(decide_reapproval(&changes), ReapprovalVerdict::NotRequired);
//! ```

pub mod diff;
pub mod error;
pub mod fields;
pub mod lexicon;
pub mod normalize;
pub mod screening;
pub mod snapshot;
pub mod verdict;

pub use diff::{
    diff_snapshots, diff_snapshots_with, moderate_field, moderate_field_with, ChangeEntry,
    DiffOptions,
};
pub use error::{ModerationError, Result};
pub use fields::{
    classify_field, tracked_fields, FieldTier, CONTENT_FIELDS, MEDIA_FIELD, OPERATIONAL_FIELDS,
    STRUCTURAL_FIELDS,
};
pub use lexicon::Lexicon;
pub use normalize::{canonical_form, values_equal, INTERNAL_KEYS};
pub use screening::{screen_text, screen_text_with, ScreeningResult};
pub use snapshot::{FieldValue, Snapshot};
pub use verdict::{decide_reapproval, ReapprovalVerdict};
