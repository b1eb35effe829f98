//! Catalog of movies and the theaters screening them.
//!
//! Catalog writes take `&mut self` and only happen while seeding; once the
//! service is shared it is read-only apart from the seat tables, which each
//! `Theater` guards itself.

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::error::BookingError;
use crate::models::seat::validate_request;
use crate::models::{Booking, SeatNumber};
use crate::services::theater::Theater;

#[derive(Debug)]
pub struct MovieService {
    seat_capacity: u32,
    movies: HashMap<String, Vec<String>>,
    theaters: HashMap<String, Theater>,
}

impl MovieService {
    pub fn new(seat_capacity: u32) -> Self {
        Self {
            seat_capacity,
            movies: HashMap::new(),
            theaters: HashMap::new(),
        }
    }

    pub fn seat_capacity(&self) -> u32 {
        self.seat_capacity
    }

    /// Registers `movie` at `theater_names`, creating unseen theaters and opening
    /// a showing in each. Registering a movie again replaces its theater list.
    pub fn add_movie(&mut self, movie: &str, theater_names: &[String]) {
        for name in theater_names {
            let capacity = self.seat_capacity;
            let theater = self
                .theaters
                .entry(name.clone())
                .or_insert_with(|| Theater::new(name.clone(), capacity));
            theater.ensure_showing(movie);
        }

        if self.movies.insert(movie.to_string(), theater_names.to_vec()).is_some() {
            debug!("Replaced theater list for '{}'", movie);
        }
    }

    /// All registered movie names, sorted.
    pub fn all_movies(&self) -> Vec<String> {
        let mut names: Vec<String> = self.movies.keys().cloned().collect();
        names.sort();
        names
    }

    /// Theaters screening `movie`; empty when the movie is unknown.
    pub fn theaters_for_movie(&self, movie: &str) -> Vec<String> {
        self.movies.get(movie).cloned().unwrap_or_default()
    }

    #[cfg(test)]
    pub fn theater(&self, name: &str) -> Option<&Theater> {
        self.theaters.get(name)
    }

    pub fn available_seats(&self, movie: &str, theater: &str) -> Result<Vec<SeatNumber>, BookingError> {
        let theater = self.showing(movie, theater)?;
        let seats = theater.available_seats(movie);
        debug!("{} seats free for '{}' at '{}'", seats.len(), movie, theater.name());
        Ok(seats)
    }

    /// Books `seats` for `movie` at `theater`. Out-of-range and repeated seats are
    /// refused before the catalog is consulted.
    pub fn book_seats(
        &self,
        movie: &str,
        theater: &str,
        seats: &[SeatNumber],
    ) -> Result<Booking, BookingError> {
        validate_request(seats, self.seat_capacity)
            .and_then(|_| self.showing(movie, theater))
            .and_then(|t| t.book_seats(movie, seats))
            .inspect_err(|e| warn!("Booking {:?} for '{}' at '{}' refused: {}", seats, movie, theater, e))?;

        let booking = Booking::new(movie, theater, seats);
        info!(booking_id = %booking.id, "Booking confirmed: {} seat(s) for '{}' at '{}'", seats.len(), movie, theater);
        Ok(booking)
    }

    pub fn is_valid_seat_number(seat: SeatNumber, available: &[SeatNumber]) -> bool {
        available.contains(&seat)
    }

    // Movie must exist, list the theater, and the theater must be known.
    fn showing(&self, movie: &str, theater: &str) -> Result<&Theater, BookingError> {
        let theaters = self
            .movies
            .get(movie)
            .ok_or_else(|| BookingError::MovieNotFound(movie.to_string()))?;

        if !theaters.iter().any(|t| t == theater) {
            return Err(BookingError::TheaterNotShowingMovie {
                movie: movie.to_string(),
                theater: theater.to_string(),
            });
        }

        self.theaters
            .get(theater)
            .ok_or_else(|| BookingError::TheaterNotFound(theater.to_string()))
    }
}
