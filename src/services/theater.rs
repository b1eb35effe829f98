//! Seat state for one theater.
//!
//! Every showing (movie screened here) owns its own `SeatTable`. All tables of a
//! theater sit behind a single mutex, so the check-then-book sequence for a
//! showing can never interleave with another caller. Different theaters lock
//! independently.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::error::BookingError;
use crate::models::{SeatNumber, SeatTable};

#[derive(Debug)]
pub struct Theater {
    name: String,
    capacity: u32,
    showings: Mutex<HashMap<String, SeatTable>>,
}

impl Theater {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            showings: Mutex::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opens a fully available seat table for `movie` unless one already exists.
    /// Returns `true` when a new table was created.
    pub fn ensure_showing(&self, movie: &str) -> bool {
        let mut showings = self.lock();
        if showings.contains_key(movie) {
            return false;
        }
        showings.insert(movie.to_string(), SeatTable::new(self.capacity));
        debug!("Opened showing '{}' at '{}' with {} seats", movie, self.name, self.capacity);
        true
    }

    #[cfg(test)]
    pub fn has_showing(&self, movie: &str) -> bool {
        self.lock().contains_key(movie)
    }

    /// Free seats for `movie`, ascending. A showing that was never opened has
    /// nothing booked yet, so the whole range is reported without creating it.
    pub fn available_seats(&self, movie: &str) -> Vec<SeatNumber> {
        match self.lock().get(movie) {
            Some(table) => table.available(),
            None => (1..=self.capacity).collect(),
        }
    }

    /// Books all of `seats` for `movie` or none of them.
    pub fn book_seats(&self, movie: &str, seats: &[SeatNumber]) -> Result<(), BookingError> {
        let mut showings = self.lock();
        let table = showings
            .entry(movie.to_string())
            .or_insert_with(|| SeatTable::new(self.capacity));

        match table.book(seats) {
            Ok(()) => {
                info!("Booked seats {:?} for '{}' at '{}'", seats, movie, self.name);
                Ok(())
            }
            Err(e) => {
                debug!("Rejected booking {:?} for '{}' at '{}': {}", seats, movie, self.name, e);
                Err(e)
            }
        }
    }

    // A table is only written after its whole request validated, so a poisoned
    // lock still guards a consistent map.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SeatTable>> {
        self.showings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
