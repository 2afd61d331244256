// TestDependencies - in-memory implementations for testing
//
// Provides collaborators that can be injected into ServiceDeps for tests,
// with inspection helpers for asserting on what the workflow did.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use super::deps::ServiceDeps;
use super::traits::{BaseBlobStore, BaseNotifier, BaseRecordStore};
use crate::common::ListingId;
use crate::config::Config;
use crate::domains::listings::models::{Booking, ListingRevision, ListingStatus, ServiceListing};

// =============================================================================
// In-memory Record Store
// =============================================================================

pub struct MemoryRecordStore {
    listings: RwLock<HashMap<ListingId, ServiceListing>>,
    revisions: RwLock<Vec<ListingRevision>>,
    bookings: RwLock<HashMap<ListingId, Vec<Booking>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            listings: RwLock::new(HashMap::new()),
            revisions: RwLock::new(Vec::new()),
            bookings: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert_listing(&self, listing: ServiceListing) {
        self.listings.write().unwrap().insert(listing.id, listing);
    }

    pub fn insert_bookings(&self, listing_id: ListingId, bookings: Vec<Booking>) {
        self.bookings.write().unwrap().insert(listing_id, bookings);
    }

    /// Current state of a listing.
    pub fn listing(&self, id: ListingId) -> Option<ServiceListing> {
        self.listings.read().unwrap().get(&id).cloned()
    }

    /// All revision records saved so far.
    pub fn revisions(&self) -> Vec<ListingRevision> {
        self.revisions.read().unwrap().clone()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRecordStore for MemoryRecordStore {
    async fn load_listing(&self, id: ListingId) -> Result<Option<ServiceListing>> {
        Ok(self.listings.read().unwrap().get(&id).cloned())
    }

    async fn save_revision(&self, revision: &ListingRevision) -> Result<()> {
        self.revisions.write().unwrap().push(revision.clone());
        Ok(())
    }

    async fn publish_content(&self, id: ListingId) -> Result<()> {
        let mut listings = self.listings.write().unwrap();
        let listing = listings
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Listing not found: {}", id))?;
        listing.approved_content = Some(listing.content.clone());
        listing.status = ListingStatus::Active;
        listing.updated_at = Utc::now();
        Ok(())
    }

    async fn set_status(&self, id: ListingId, status: ListingStatus) -> Result<()> {
        let mut listings = self.listings.write().unwrap();
        let listing = listings
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Listing not found: {}", id))?;
        listing.status = status;
        listing.updated_at = Utc::now();
        Ok(())
    }

    async fn find_pending_review_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ServiceListing>> {
        Ok(self
            .listings
            .read()
            .unwrap()
            .values()
            .filter(|listing| {
                listing.status == ListingStatus::PendingReview && listing.updated_at <= cutoff
            })
            .cloned()
            .collect())
    }

    async fn load_bookings(&self, id: ListingId) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }
}

// =============================================================================
// In-memory Blob Store
// =============================================================================

/// One stored object, kept for inspection.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Keys of every stored object.
    pub fn object_keys(&self) -> Vec<String> {
        self.objects.read().unwrap().keys().cloned().collect()
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.read().unwrap().len()
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseBlobStore for MemoryBlobStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        self.objects.write().unwrap().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(format!("https://cdn.example.org/{}", key))
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        self.objects.write().unwrap().remove(key);
        Ok(())
    }
}

// =============================================================================
// Recording Notifier
// =============================================================================

/// An email captured by the recording notifier
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

pub struct RecordingNotifier {
    emails: Mutex<Vec<SentEmail>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            emails: Mutex::new(Vec::new()),
        }
    }

    /// All emails sent so far.
    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.emails.lock().unwrap().clone()
    }

    /// Check if anything was sent to a recipient.
    pub fn was_notified(&self, recipient: &str) -> bool {
        self.emails
            .lock()
            .unwrap()
            .iter()
            .any(|email| email.recipient == recipient)
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotifier for RecordingNotifier {
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        self.emails.lock().unwrap().push(SentEmail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

// =============================================================================
// TestDependencies bundle
// =============================================================================

/// Concrete in-memory collaborators plus a view of them as `ServiceDeps`.
///
/// Keep the bundle around in tests: the concrete handles expose the
/// inspection helpers that the trait objects hide.
pub struct TestDependencies {
    pub records: Arc<MemoryRecordStore>,
    pub blobs: Arc<MemoryBlobStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub config: Config,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            records: Arc::new(MemoryRecordStore::new()),
            blobs: Arc::new(MemoryBlobStore::new()),
            notifier: Arc::new(RecordingNotifier::new()),
            config: Config::for_tests(),
        }
    }

    pub fn with_listing(self, listing: ServiceListing) -> Self {
        self.records.insert_listing(listing);
        self
    }

    pub fn with_bookings(self, listing_id: ListingId, bookings: Vec<Booking>) -> Self {
        self.records.insert_bookings(listing_id, bookings);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// View the bundle as `ServiceDeps` for passing to effects.
    pub fn deps(&self) -> ServiceDeps {
        let records: Arc<dyn BaseRecordStore> = self.records.clone();
        let blobs: Arc<dyn BaseBlobStore> = self.blobs.clone();
        let notifier: Arc<dyn BaseNotifier> = self.notifier.clone();
        ServiceDeps::new(records, blobs, notifier, self.config.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
