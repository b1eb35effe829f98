//! Property tests: a booking either takes every requested seat or none.
//!
//! Run with: `cargo test --test all_or_nothing_proptest`

#![allow(clippy::unwrap_used)]

use cinema_booking::models::CatalogEntry;
use cinema_booking::services::{seed_catalog, MovieService};
use proptest::prelude::*;

const CAPACITY: u32 = 10;

fn service() -> MovieService {
    let mut service = MovieService::new(CAPACITY);
    seed_catalog(&mut service, &[CatalogEntry::new("Dune", &["Rex"])]);
    service
}

proptest! {
    /// Seats outside a failed batch keep their state, seats inside it stay free
    /// unless an earlier booking took them.
    #[test]
    fn failed_batches_leave_no_trace(
        prebooked in proptest::collection::btree_set(1..=CAPACITY, 0..5),
        batch in proptest::collection::vec(0..=CAPACITY + 2, 1..6),
    ) {
        let service = service();
        if !prebooked.is_empty() {
            let seats: Vec<u32> = prebooked.iter().copied().collect();
            service.book_seats("Dune", "Rex", &seats).unwrap();
        }
        let before = service.available_seats("Dune", "Rex").unwrap();

        match service.book_seats("Dune", "Rex", &batch) {
            Ok(booking) => {
                let after = service.available_seats("Dune", "Rex").unwrap();
                prop_assert_eq!(after.len(), before.len() - batch.len());
                for seat in &booking.seats {
                    prop_assert!(before.contains(seat));
                    prop_assert!(!after.contains(seat));
                }
            }
            Err(_) => {
                prop_assert_eq!(service.available_seats("Dune", "Rex").unwrap(), before);
            }
        }
    }

    /// Any sequence of bookings leaves booked + free == capacity.
    #[test]
    fn seat_count_is_conserved(
        batches in proptest::collection::vec(
            proptest::collection::vec(1..=CAPACITY, 1..4),
            0..8,
        ),
    ) {
        let service = service();
        let mut booked = 0usize;
        for batch in &batches {
            if let Ok(booking) = service.book_seats("Dune", "Rex", batch) {
                booked += booking.seats.len();
            }
        }
        let free = service.available_seats("Dune", "Rex").unwrap().len();
        prop_assert_eq!(booked + free, CAPACITY as usize);
    }
}
