use chrono::{DateTime, Utc};
use moderation::{ChangeEntry, ReapprovalVerdict};
use serde::{Deserialize, Serialize};

use crate::common::{ListingId, RevisionId};

/// ListingRevision - the audit record of one reviewed edit
///
/// Captures what changed, how each change was classified and screened,
/// and the verdict that was applied. Revisions are append-only; reviewing
/// the same edit twice writes two records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRevision {
    pub id: RevisionId,
    pub listing_id: ListingId,
    /// Provider display name at the time of review.
    pub submitter_name: String,
    pub changes: Vec<ChangeEntry>,
    pub verdict: ReapprovalVerdict,
    /// True when the edit was turned away by screening.
    pub rejected: bool,
    pub created_at: DateTime<Utc>,
}

impl ListingRevision {
    pub fn new(
        listing_id: ListingId,
        submitter_name: impl Into<String>,
        changes: Vec<ChangeEntry>,
        verdict: ReapprovalVerdict,
    ) -> Self {
        Self {
            id: RevisionId::new(),
            listing_id,
            submitter_name: submitter_name.into(),
            changes,
            verdict,
            rejected: verdict == ReapprovalVerdict::ModerationFailed,
            created_at: Utc::now(),
        }
    }

    /// Every distinct failing screening reason across the revision's
    /// changes, in first-occurrence order.
    pub fn failed_reasons(&self) -> Vec<String> {
        let mut reasons: Vec<String> = Vec::new();
        for entry in &self.changes {
            if let Some(outcome) = &entry.moderation {
                if !outcome.passed {
                    for reason in &outcome.reasons {
                        if !reasons.contains(reason) {
                            reasons.push(reason.clone());
                        }
                    }
                }
            }
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moderation::{FieldTier, ScreeningResult};
    use serde_json::{json, Value};

    fn change(field: &str, category: FieldTier, reasons: Vec<&str>) -> ChangeEntry {
        let moderation = match category {
            FieldTier::Content => Some(ScreeningResult::from_reasons(
                reasons.into_iter().map(String::from).collect(),
            )),
            _ => None,
        };
        ChangeEntry {
            field: field.to_string(),
            category,
            old_value: Value::Null,
            new_value: json!("x"),
            moderation,
        }
    }

    #[test]
    fn moderation_failed_revisions_are_marked_rejected() {
        let failed = ListingRevision::new(
            ListingId::new(),
            "Acme Corp",
            vec![change(
                "description",
                FieldTier::Content,
                vec!["Contains inappropriate language"],
            )],
            ReapprovalVerdict::ModerationFailed,
        );
        assert!(failed.rejected);

        let clean = ListingRevision::new(
            ListingId::new(),
            "Acme Corp",
            vec![change("title", FieldTier::Content, vec![])],
            ReapprovalVerdict::NotRequired,
        );
        assert!(!clean.rejected);
    }

    #[test]
    fn failed_reasons_are_collected_and_deduplicated() {
        let revision = ListingRevision::new(
            ListingId::new(),
            "Acme Corp",
            vec![
                change(
                    "title",
                    FieldTier::Content,
                    vec!["Contains inappropriate language"],
                ),
                change(
                    "description",
                    FieldTier::Content,
                    vec![
                        "Contains inappropriate language",
                        "Contains company name \"Acme Corp\"",
                    ],
                ),
                change("category", FieldTier::Structural, vec![]),
            ],
            ReapprovalVerdict::ModerationFailed,
        );

        assert_eq!(
            revision.failed_reasons(),
            vec![
                "Contains inappropriate language",
                "Contains company name \"Acme Corp\"",
            ]
        );
    }
}
