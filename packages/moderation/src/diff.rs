//! Change detection over snapshots, with screening attached.
//!
//! The diff walks the tracked-field table in order, compares canonical
//! forms, and emits one entry per differing field. Content-tier entries
//! carry the screening outcome for their new value. The walk never
//! short-circuits: even when a structural change already forces full
//! reapproval, every change is still recorded for the audit trail.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{classify_field, tracked_fields, FieldTier, MEDIA_FIELD};
use crate::lexicon::Lexicon;
use crate::normalize::canonical_form;
use crate::screening::{screen_text_with, ScreeningResult};
use crate::snapshot::{FieldValue, Snapshot};

/// Reason attached to any media change. Rich media can't be judged by
/// text checks, so it is gated for an admin rather than screened.
pub(crate) const MEDIA_REVIEW_REASON: &str = "Media changes require admin review";

/// Textual sub-fields screened on object elements of sequence values
/// (subproject entries, FAQ entries).
const TEXT_SUBFIELDS: [&str; 5] = [
    "name",
    "description",
    "question",
    "answer",
    "customConfirmationMessage",
];

lazy_static! {
    /// Attachment entries shaped like URLs are stored file references,
    /// not provider prose.
    static ref URL_SHAPED: Regex = Regex::new(r"(?i)^https?://").unwrap();
}

/// One tracked field's before and after values, its tier, and (for
/// content-tier fields) the screening outcome. Built once during a diff
/// pass; the surrounding workflow persists it as an audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub field: String,
    pub category: FieldTier,
    /// Previous value; a missing field is recorded as null.
    pub old_value: Value,
    /// New value; a removed field is recorded as null.
    pub new_value: Value,
    /// Screening outcome, present only on content-tier entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation: Option<ScreeningResult>,
}

impl ChangeEntry {
    /// True when this entry carries a failed screening result.
    pub fn failed_moderation(&self) -> bool {
        self.moderation
            .as_ref()
            .map(|outcome| !outcome.passed)
            .unwrap_or(false)
    }
}

/// Options for one diff pass.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Submitter display name screened against content changes.
    pub submitter_name: Option<String>,
    /// Emit per-change debug diagnostics. Purely observational; the
    /// change list is identical either way.
    pub verbose_logging: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submitter_name(mut self, name: impl Into<String>) -> Self {
        self.submitter_name = Some(name.into());
        self
    }

    pub fn with_verbose_logging(mut self, verbose: bool) -> Self {
        self.verbose_logging = verbose;
        self
    }
}

/// Compare two snapshots across the full tracked-field table.
///
/// Output order follows the table: structural fields first, then content,
/// then operational. Unchanged fields (by canonical form) produce no
/// entry, so bookkeeping-only differences like `_id` churn are invisible.
pub fn diff_snapshots(
    previous: &Snapshot,
    current: &Snapshot,
    options: &DiffOptions,
) -> Vec<ChangeEntry> {
    diff_snapshots_with(Lexicon::shared(), previous, current, options)
}

/// `diff_snapshots` against an explicit lexicon.
pub fn diff_snapshots_with(
    lexicon: &Lexicon,
    previous: &Snapshot,
    current: &Snapshot,
    options: &DiffOptions,
) -> Vec<ChangeEntry> {
    let mut entries = Vec::new();

    for field in tracked_fields() {
        let old_value = previous.get(field);
        let new_value = current.get(field);

        if canonical_form(old_value) == canonical_form(new_value) {
            continue;
        }

        let category = classify_field(field);
        let moderation = match category {
            FieldTier::Content => Some(moderate_field_with(
                lexicon, field, new_value, old_value, options,
            )),
            FieldTier::Structural | FieldTier::Operational => None,
        };

        if options.verbose_logging {
            tracing::debug!(
                field,
                tier = %category,
                passed = moderation.as_ref().map(|outcome| outcome.passed),
                "Tracked field changed"
            );
        }

        entries.push(ChangeEntry {
            field: field.to_string(),
            category,
            old_value: old_value.cloned().unwrap_or(Value::Null),
            new_value: new_value.cloned().unwrap_or(Value::Null),
            moderation,
        });
    }

    entries
}

/// Screen a content-tier field's new value using the shared lexicon.
pub fn moderate_field(
    field: &str,
    new_value: Option<&Value>,
    old_value: Option<&Value>,
    options: &DiffOptions,
) -> ScreeningResult {
    moderate_field_with(Lexicon::shared(), field, new_value, old_value, options)
}

/// Screen a content-tier field's new value against an explicit lexicon.
///
/// Media fails unconditionally with the admin-review reason. Strings are
/// screened directly. Sequences are screened element by element: string
/// elements as-is, object elements on their known textual sub-fields plus
/// `options` and `professionalAttachments` entries. Anything else passes
/// vacuously.
pub fn moderate_field_with(
    lexicon: &Lexicon,
    field: &str,
    new_value: Option<&Value>,
    old_value: Option<&Value>,
    options: &DiffOptions,
) -> ScreeningResult {
    if field == MEDIA_FIELD {
        return ScreeningResult::from_reasons(vec![MEDIA_REVIEW_REASON.to_string()]);
    }

    let submitter = options.submitter_name.as_deref();
    let result = match FieldValue::of(new_value) {
        FieldValue::Text(text) => screen_text_with(lexicon, text, submitter),
        FieldValue::Items(items) => screen_items(lexicon, field, items, submitter),
        FieldValue::Absent | FieldValue::Scalar(_) | FieldValue::Record(_) => {
            ScreeningResult::pass()
        }
    };

    if options.verbose_logging && !result.passed {
        tracing::debug!(
            field,
            old = %canonical_form(old_value),
            reasons = ?result.reasons,
            "Content change failed screening"
        );
    }

    result
}

/// Screen every element of a sequence value, accumulating reasons.
///
/// Reasons from object sub-fields are prefixed with their path
/// (`subprojects.name: ...`) so a reviewer can find the offending text.
/// Duplicates are dropped, keeping first-occurrence order.
fn screen_items(
    lexicon: &Lexicon,
    field: &str,
    items: &[Value],
    submitter: Option<&str>,
) -> ScreeningResult {
    let mut reasons: Vec<String> = Vec::new();

    for item in items {
        match item {
            Value::String(text) => {
                extend_reasons(
                    &mut reasons,
                    screen_text_with(lexicon, text, submitter).reasons,
                );
            }
            Value::Object(element) => {
                for sub_field in TEXT_SUBFIELDS {
                    if let Some(Value::String(text)) = element.get(sub_field) {
                        extend_prefixed(
                            &mut reasons,
                            &format!("{}.{}", field, sub_field),
                            screen_text_with(lexicon, text, submitter).reasons,
                        );
                    }
                }
                if let Some(Value::Array(choices)) = element.get("options") {
                    for (index, choice) in choices.iter().enumerate() {
                        if let Value::String(text) = choice {
                            extend_prefixed(
                                &mut reasons,
                                &format!("{}.options[{}]", field, index),
                                screen_text_with(lexicon, text, submitter).reasons,
                            );
                        }
                    }
                }
                if let Some(Value::Array(attachments)) = element.get("professionalAttachments") {
                    for (index, attachment) in attachments.iter().enumerate() {
                        if let Value::String(text) = attachment {
                            if URL_SHAPED.is_match(text.trim()) {
                                continue;
                            }
                            extend_prefixed(
                                &mut reasons,
                                &format!("{}.professionalAttachments[{}]", field, index),
                                screen_text_with(lexicon, text, submitter).reasons,
                            );
                        }
                    }
                }
            }
            _ => {}
        }
    }

    ScreeningResult::from_reasons(reasons)
}

/// Append reasons, dropping duplicates and keeping first-occurrence order.
fn extend_reasons(into: &mut Vec<String>, found: Vec<String>) {
    for reason in found {
        if !into.contains(&reason) {
            into.push(reason);
        }
    }
}

/// As `extend_reasons`, with each reason prefixed by its sub-field path.
fn extend_prefixed(into: &mut Vec<String>, prefix: &str, found: Vec<String>) {
    for reason in found {
        let prefixed = format!("{}: {}", prefix, reason);
        if !into.contains(&prefixed) {
            into.push(prefixed);
        }
    }
}
