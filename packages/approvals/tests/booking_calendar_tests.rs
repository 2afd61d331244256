//! Integration tests for the booking calendar view.

use approvals_core::common::{BookingId, ListingId};
use approvals_core::domains::listings::effects::blocked_dates_for_listing;
use approvals_core::domains::listings::models::{BookedRange, Booking, BookingStatus};
use approvals_core::kernel::TestDependencies;
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
}

fn booking(listing_id: ListingId, status: BookingStatus, start: u32, end: u32) -> Booking {
    Booking {
        id: BookingId::new(),
        listing_id,
        status,
        start_date: day(start),
        end_date: day(end),
    }
}

#[tokio::test]
async fn blocked_dates_merge_confirmed_bookings() {
    let listing_id = ListingId::new();
    let harness = TestDependencies::new().with_bookings(
        listing_id,
        vec![
            booking(listing_id, BookingStatus::Confirmed, 3, 5),
            booking(listing_id, BookingStatus::Confirmed, 5, 8),
            booking(listing_id, BookingStatus::Requested, 10, 12),
            booking(listing_id, BookingStatus::Confirmed, 20, 21),
        ],
    );

    let ranges = blocked_dates_for_listing(listing_id, &harness.deps())
        .await
        .expect("lookup failed");

    assert_eq!(
        ranges,
        vec![
            BookedRange {
                start_date: day(3),
                end_date: day(8),
            },
            BookedRange {
                start_date: day(20),
                end_date: day(21),
            },
        ]
    );
}

#[tokio::test]
async fn listings_without_bookings_have_open_calendars() {
    let harness = TestDependencies::new();

    let ranges = blocked_dates_for_listing(ListingId::new(), &harness.deps())
        .await
        .expect("lookup failed");

    assert!(ranges.is_empty());
}
