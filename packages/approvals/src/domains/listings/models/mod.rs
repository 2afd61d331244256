pub mod booking;
pub mod listing;
pub mod revision;

pub use booking::{BookedRange, Booking, BookingStatus};
pub use listing::{FaqEntry, ListingContent, ListingStatus, ServiceListing, Subproject};
pub use revision::ListingRevision;
