// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "review a revision") should be domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseRecordStore, BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::ListingId;
use crate::domains::listings::models::{Booking, ListingRevision, ListingStatus, ServiceListing};

// =============================================================================
// Record Store Trait (Infrastructure - listing and revision persistence)
// =============================================================================

#[async_trait]
pub trait BaseRecordStore: Send + Sync {
    /// Load a listing with its current and last-approved content
    async fn load_listing(&self, id: ListingId) -> Result<Option<ServiceListing>>;

    /// Append a revision audit record
    async fn save_revision(&self, revision: &ListingRevision) -> Result<()>;

    /// Publish the listing's current content as the approved version and
    /// mark the listing active
    async fn publish_content(&self, id: ListingId) -> Result<()>;

    /// Update the listing's status
    async fn set_status(&self, id: ListingId, status: ListingStatus) -> Result<()>;

    /// Listings that entered pending review before the cutoff and are
    /// still waiting
    async fn find_pending_review_since(&self, cutoff: DateTime<Utc>)
        -> Result<Vec<ServiceListing>>;

    /// All bookings recorded against a listing
    async fn load_bookings(&self, id: ListingId) -> Result<Vec<Booking>>;
}

// =============================================================================
// Blob Store Trait (Infrastructure - media object storage)
// =============================================================================

#[async_trait]
pub trait BaseBlobStore: Send + Sync {
    /// Store an object under a key and return its public URL
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String>;

    /// Delete an object by key
    async fn delete_object(&self, key: &str) -> Result<()>;
}

// =============================================================================
// Notifier Trait (Infrastructure - outbound email)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Send one email
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}
