use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ListingId, ProviderId};

/// ServiceListing - a provider's service offer on the marketplace
///
/// `content` is the provider's current edit; `approved_content` is the
/// last admin-approved version, which is what the public sees. The
/// approval workflow diffs the two to decide whether an edit publishes
/// immediately or waits on review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: ListingId,
    pub provider_id: ProviderId,

    /// Provider display name; content screening flags edits that mention
    /// it.
    pub provider_name: String,
    /// Where rejection notices go.
    pub provider_email: String,

    pub status: ListingStatus,

    pub content: ListingContent,
    pub approved_content: Option<ListingContent>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceListing {
    /// The title shown in notifications, falling back for drafts that
    /// haven't set one yet.
    pub fn display_title(&self) -> &str {
        self.content.title.as_deref().unwrap_or("(untitled)")
    }
}

/// The tracked fields of a listing.
///
/// Serialized in camelCase so snapshots carry exactly the field names the
/// classification table declares. Unset fields are omitted rather than
/// serialized as null, which is how the diff distinguishes "never set"
/// from "cleared".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingContent {
    // Structural
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_types: Option<Vec<String>>,

    // Content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media URLs (photos, short videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subprojects: Option<Vec<Subproject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqEntry>>,

    // Operational
    /// Typical engagement length in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Last date the service can be booked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_execution_end_date: Option<NaiveDate>,
}

/// A scoped piece of work offered under a listing (e.g. "deck staining"
/// under a painting listing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subproject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Customer-selectable variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Reference documents; URLs point at stored files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_attachments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_confirmation_message: Option<String>,
}

/// One question-and-answer pair on a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Listing lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Draft,
    Active,
    PendingReview,
    Suspended,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::Draft => write!(f, "draft"),
            ListingStatus::Active => write!(f, "active"),
            ListingStatus::PendingReview => write!(f, "pending_review"),
            ListingStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(ListingStatus::Draft),
            "active" => Ok(ListingStatus::Active),
            "pending_review" => Ok(ListingStatus::PendingReview),
            "suspended" => Ok(ListingStatus::Suspended),
            _ => Err(anyhow::anyhow!("Invalid listing status: {}", s)),
        }
    }
}
