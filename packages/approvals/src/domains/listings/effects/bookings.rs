//! Booking calendar helpers.
//!
//! Customers browsing a listing need to know which dates are already
//! taken. Only confirmed bookings block the calendar; requests that were
//! never accepted and cancellations do not.

use anyhow::{Context, Result};

use crate::common::ListingId;
use crate::domains::listings::models::{BookedRange, Booking, BookingStatus};
use crate::kernel::deps::ServiceDeps;

/// Reduce a listing's bookings to the date ranges that block its
/// calendar.
///
/// Confirmed bookings are sorted by start date, then overlapping and
/// back-to-back ranges merge into one span. Bookings with an end date
/// before their start date are ignored as malformed.
pub fn booked_ranges(bookings: &[Booking]) -> Vec<BookedRange> {
    let mut confirmed: Vec<&Booking> = bookings
        .iter()
        .filter(|booking| {
            booking.status == BookingStatus::Confirmed && booking.start_date <= booking.end_date
        })
        .collect();
    confirmed.sort_by_key(|booking| (booking.start_date, booking.end_date));

    let mut ranges: Vec<BookedRange> = Vec::new();
    for booking in confirmed {
        match ranges.last_mut() {
            Some(last)
                if last
                    .end_date
                    .succ_opt()
                    .map(|day_after| booking.start_date <= day_after)
                    .unwrap_or(false) =>
            {
                if booking.end_date > last.end_date {
                    last.end_date = booking.end_date;
                }
            }
            _ => ranges.push(BookedRange {
                start_date: booking.start_date,
                end_date: booking.end_date,
            }),
        }
    }

    ranges
}

/// Blocked date ranges for one listing, loaded through the record store.
pub async fn blocked_dates_for_listing(
    listing_id: ListingId,
    deps: &ServiceDeps,
) -> Result<Vec<BookedRange>> {
    let bookings = deps
        .records
        .load_bookings(listing_id)
        .await
        .context("Failed to load bookings")?;
    Ok(booked_ranges(&bookings))
}
