//! Typed ID aliases for the approval domain's entities.

use super::id::Id;

/// Marker for service listings.
pub struct Listing;
/// Marker for the providers who own listings.
pub struct Provider;
/// Marker for listing revision audit records.
pub struct Revision;
/// Marker for customer bookings.
pub struct BookingRecord;

pub type ListingId = Id<Listing>;
pub type ProviderId = Id<Provider>;
pub type RevisionId = Id<Revision>;
pub type BookingId = Id<BookingRecord>;
