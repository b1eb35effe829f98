use uuid::Uuid;

use super::SeatNumber;

/// Receipt for a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub movie: String,
    pub theater: String,
    pub seats: Vec<SeatNumber>,
}

impl Booking {
    pub fn new(movie: &str, theater: &str, seats: &[SeatNumber]) -> Self {
        Self {
            id: Uuid::new_v4(),
            movie: movie.to_string(),
            theater: theater.to_string(),
            seats: seats.to_vec(),
        }
    }
}
