pub mod bookings;
pub mod media;
pub mod review;

pub use bookings::{blocked_dates_for_listing, booked_ranges};
pub use media::{delete_listing_media, store_listing_media};
pub use review::{review_listing_revision, RevisionReview};
