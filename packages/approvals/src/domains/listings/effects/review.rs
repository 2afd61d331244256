//! Revision review - the approval gate for listing edits.
//!
//! Diffs a listing's current content against its last approved version,
//! records the revision for audit, then applies the verdict:
//!
//! - no blocking changes: the edit publishes immediately
//! - structural changes: the listing goes to pending review and an admin
//!   is asked to reapprove it
//! - failed screening: the edit is turned away; the approved version
//!   stays live and the provider is told why

use anyhow::{anyhow, Context, Result};
use moderation::{decide_reapproval, diff_snapshots_with, DiffOptions, ReapprovalVerdict, Snapshot};

use crate::common::{ListingId, RevisionId};
use crate::domains::listings::models::{ListingRevision, ListingStatus, ServiceListing};
use crate::kernel::deps::ServiceDeps;

/// Outcome of reviewing one edited listing.
#[derive(Debug, Clone)]
pub struct RevisionReview {
    /// Audit record id; `None` when the edit contained no tracked
    /// changes and nothing was recorded.
    pub revision_id: Option<RevisionId>,
    pub verdict: ReapprovalVerdict,
    pub change_count: usize,
}

/// Review a listing's pending edits against its approved version.
pub async fn review_listing_revision(
    listing_id: ListingId,
    deps: &ServiceDeps,
) -> Result<RevisionReview> {
    let listing = deps
        .records
        .load_listing(listing_id)
        .await
        .context("Failed to load listing")?
        .ok_or_else(|| anyhow!("Listing not found: {}", listing_id))?;

    // First submissions diff against an empty snapshot, so every set
    // field shows up as a change.
    let previous = match &listing.approved_content {
        Some(content) => {
            Snapshot::from_record(content).context("Failed to snapshot approved content")?
        }
        None => Snapshot::new(),
    };
    let current =
        Snapshot::from_record(&listing.content).context("Failed to snapshot edited content")?;

    let options = DiffOptions::new()
        .with_submitter_name(listing.provider_name.clone())
        .with_verbose_logging(deps.config.verbose_moderation_logging);

    let changes = diff_snapshots_with(&deps.lexicon, &previous, &current, &options);
    let verdict = decide_reapproval(&changes);

    if changes.is_empty() {
        tracing::info!("No tracked changes on listing {}; nothing to review", listing_id);
        return Ok(RevisionReview {
            revision_id: None,
            verdict,
            change_count: 0,
        });
    }

    let revision = ListingRevision::new(
        listing_id,
        listing.provider_name.clone(),
        changes,
        verdict,
    );
    deps.records
        .save_revision(&revision)
        .await
        .context("Failed to save revision record")?;

    match verdict {
        ReapprovalVerdict::NotRequired => {
            deps.records
                .publish_content(listing_id)
                .await
                .context("Failed to publish edited content")?;

            tracing::info!(
                "Published {} change(s) on listing {} without reapproval",
                revision.changes.len(),
                listing_id
            );
        }
        ReapprovalVerdict::Full => {
            deps.records
                .set_status(listing_id, ListingStatus::PendingReview)
                .await
                .context("Failed to move listing to pending review")?;

            deps.notifier
                .send_email(
                    &deps.config.admin_email,
                    "Listing edit needs review",
                    &review_request_body(&listing, &revision),
                )
                .await
                .context("Failed to notify admins")?;

            tracing::info!(
                "Listing {} has structural changes; queued for admin review",
                listing_id
            );
        }
        ReapprovalVerdict::ModerationFailed => {
            // The approved version stays live; only the edit is refused.
            deps.notifier
                .send_email(
                    &listing.provider_email,
                    "Your listing changes were not published",
                    &rejection_body(&listing, &revision),
                )
                .await
                .context("Failed to notify provider")?;

            tracing::info!(
                "Listing {} edit failed screening with {} reason(s)",
                listing_id,
                revision.failed_reasons().len()
            );
        }
    }

    Ok(RevisionReview {
        revision_id: Some(revision.id),
        verdict,
        change_count: revision.changes.len(),
    })
}

fn review_request_body(listing: &ServiceListing, revision: &ListingRevision) -> String {
    let mut body = format!(
        "\"{}\" ({}) was edited by {} and needs reapproval.\n\nChanged fields:\n",
        listing.display_title(),
        listing.id,
        revision.submitter_name
    );
    for entry in &revision.changes {
        body.push_str(&format!("- {} (tier {})\n", entry.field, entry.category));
    }
    body
}

fn rejection_body(listing: &ServiceListing, revision: &ListingRevision) -> String {
    let mut body = format!(
        "Your recent changes to \"{}\" could not be published:\n\n",
        listing.display_title()
    );
    for reason in revision.failed_reasons() {
        body.push_str(&format!("- {}\n", reason));
    }
    body.push_str("\nThe previously approved version of your listing is still live.\n");
    body
}
