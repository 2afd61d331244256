//! Integration tests for the revision review workflow.
//!
//! Each test drives `review_listing_revision` end to end against
//! in-memory dependencies and asserts on the three observable outcomes:
//! what got published, what got recorded, and who got notified.

use approvals_core::common::{ListingId, ProviderId};
use approvals_core::domains::listings::effects::review_listing_revision;
use approvals_core::domains::listings::models::{
    FaqEntry, ListingContent, ListingStatus, ServiceListing,
};
use approvals_core::kernel::TestDependencies;
use approvals_core::Config;
use chrono::Utc;
use moderation::ReapprovalVerdict;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn base_content() -> ListingContent {
    ListingContent {
        category: Some("landscaping".to_string()),
        title: Some("Garden makeovers".to_string()),
        description: Some("Full garden redesign and planting.".to_string()),
        keywords: Some(vec!["garden".to_string()]),
        ..Default::default()
    }
}

fn listing_with(content: ListingContent, approved: Option<ListingContent>) -> ServiceListing {
    let now = Utc::now();
    ServiceListing {
        id: ListingId::new(),
        provider_id: ProviderId::new(),
        provider_name: "Acme Corp".to_string(),
        provider_email: "owner@acme.example".to_string(),
        status: ListingStatus::Active,
        content,
        approved_content: approved,
        created_at: now,
        updated_at: now,
    }
}

// =============================================================================
// Publish-immediately path
// =============================================================================

#[tokio::test]
async fn clean_content_edit_publishes_immediately() {
    // Arrange: the provider retitled the listing, nothing else
    let mut edited = base_content();
    edited.title = Some("Garden makeovers and patios".to_string());
    let listing = listing_with(edited.clone(), Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    // Act
    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    // Assert: published, recorded, nobody notified
    assert_eq!(review.verdict, ReapprovalVerdict::NotRequired);
    assert_eq!(review.change_count, 1);
    assert!(review.revision_id.is_some());

    let stored = harness.records.listing(listing_id).unwrap();
    assert_eq!(stored.approved_content, Some(edited));
    assert_eq!(stored.status, ListingStatus::Active);

    assert!(harness.notifier.sent_emails().is_empty());

    let revisions = harness.records.revisions();
    assert_eq!(revisions.len(), 1);
    assert!(!revisions[0].rejected);
    assert_eq!(revisions[0].changes[0].field, "title");
}

#[tokio::test]
async fn operational_edits_publish_without_any_screening() {
    let mut edited = base_content();
    edited.keywords = Some(vec!["garden".to_string(), "patio".to_string()]);
    edited.team_size = Some(4);
    let listing = listing_with(edited, Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    assert_eq!(review.verdict, ReapprovalVerdict::NotRequired);
    assert_eq!(review.change_count, 2);
    assert!(harness.notifier.sent_emails().is_empty());
}

// =============================================================================
// Admin review path
// =============================================================================

#[tokio::test]
async fn structural_edit_waits_for_admin_review() {
    // Arrange: the provider recategorized the listing
    let mut edited = base_content();
    edited.category = Some("hardscaping".to_string());
    let listing = listing_with(edited.clone(), Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    // Act
    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    // Assert: held for review, approved version untouched, admins asked
    assert_eq!(review.verdict, ReapprovalVerdict::Full);

    let stored = harness.records.listing(listing_id).unwrap();
    assert_eq!(stored.status, ListingStatus::PendingReview);
    assert_eq!(stored.approved_content, Some(base_content()));

    let emails = harness.notifier.sent_emails();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, "admins@example.org");
    assert_eq!(emails[0].subject, "Listing edit needs review");
    assert!(emails[0].body.contains("category"));
}

#[tokio::test]
async fn first_submission_is_reviewed_in_full() {
    // No approved version yet: every set field counts as a change, and
    // the structural ones send it to an admin.
    let listing = listing_with(base_content(), None);
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    assert_eq!(review.verdict, ReapprovalVerdict::Full);
    assert_eq!(review.change_count, 4);
    assert!(harness.notifier.was_notified("admins@example.org"));
}

// =============================================================================
// Screening-rejection path
// =============================================================================

#[tokio::test]
async fn self_promoting_edit_is_rejected_with_reasons() {
    // Arrange: the new description name-drops the provider
    let mut edited = base_content();
    edited.description = Some("Garden redesign by Acme Corp, call now!".to_string());
    let listing = listing_with(edited, Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    // Act
    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    // Assert: edit refused, approved version stays live, provider told why
    assert_eq!(review.verdict, ReapprovalVerdict::ModerationFailed);

    let stored = harness.records.listing(listing_id).unwrap();
    assert_eq!(stored.approved_content, Some(base_content()));
    assert_eq!(stored.status, ListingStatus::Active);

    let emails = harness.notifier.sent_emails();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, "owner@acme.example");
    assert!(emails[0]
        .body
        .contains("Contains company name \"Acme Corp\""));
    assert!(emails[0].body.contains("still live"));

    let revisions = harness.records.revisions();
    assert_eq!(revisions.len(), 1);
    assert!(revisions[0].rejected);
}

#[tokio::test]
async fn media_edit_is_gated_to_admin_review_reason() {
    let mut edited = base_content();
    edited.media = Some(vec!["https://cdn.example.org/listings/x/deck.jpg".to_string()]);
    let listing = listing_with(edited, Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    assert_eq!(review.verdict, ReapprovalVerdict::ModerationFailed);

    let emails = harness.notifier.sent_emails();
    assert_eq!(emails.len(), 1);
    assert!(emails[0].body.contains("Media changes require admin review"));
}

#[tokio::test]
async fn faq_text_is_screened_inside_entries() {
    let mut edited = base_content();
    edited.faq = Some(vec![FaqEntry {
        question: Some("Why choose us?".to_string()),
        answer: Some("Because Acme Corp beats every other provider.".to_string()),
    }]);
    let listing = listing_with(edited, Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    assert_eq!(review.verdict, ReapprovalVerdict::ModerationFailed);
    let emails = harness.notifier.sent_emails();
    assert!(emails[0]
        .body
        .contains("faq.answer: Contains company name \"Acme Corp\""));
}

// =============================================================================
// Edge cases
// =============================================================================

#[tokio::test]
async fn unchanged_listing_records_nothing() {
    let listing = listing_with(base_content(), Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    assert_eq!(review.verdict, ReapprovalVerdict::NotRequired);
    assert_eq!(review.change_count, 0);
    assert!(review.revision_id.is_none());
    assert!(harness.records.revisions().is_empty());
    assert!(harness.notifier.sent_emails().is_empty());
}

#[tokio::test]
async fn reviewing_a_missing_listing_errors() {
    let harness = TestDependencies::new();

    let result = review_listing_revision(ListingId::new(), &harness.deps()).await;

    let error = result.expect_err("expected an error");
    assert!(error.to_string().contains("Listing not found"));
}

#[tokio::test]
async fn verbose_logging_does_not_change_the_outcome() {
    init_tracing();

    let mut config = Config::for_tests();
    config.verbose_moderation_logging = true;

    let mut edited = base_content();
    edited.category = Some("hardscaping".to_string());
    edited.description = Some("Done by Acme Corp".to_string());
    let listing = listing_with(edited, Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new()
        .with_listing(listing)
        .with_config(config);

    let review = review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    // Structural still outranks the failed content screening.
    assert_eq!(review.verdict, ReapprovalVerdict::Full);
    assert_eq!(review.change_count, 2);
}

#[tokio::test]
async fn audit_trail_keeps_every_change_in_table_order() {
    let mut edited = base_content();
    edited.category = Some("hardscaping".to_string());
    edited.title = Some("New title".to_string());
    edited.keywords = Some(vec!["garden".to_string(), "stone".to_string()]);
    let listing = listing_with(edited, Some(base_content()));
    let listing_id = listing.id;
    let harness = TestDependencies::new().with_listing(listing);

    review_listing_revision(listing_id, &harness.deps())
        .await
        .expect("review failed");

    let revisions = harness.records.revisions();
    let fields: Vec<&str> = revisions[0]
        .changes
        .iter()
        .map(|change| change.field.as_str())
        .collect();
    assert_eq!(fields, vec!["category", "title", "keywords"]);
}
