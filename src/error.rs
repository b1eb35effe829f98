use thiserror::Error;

/// Why a seat query or booking was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("movie '{0}' not found")]
    MovieNotFound(String),

    #[error("theater '{0}' not found")]
    TheaterNotFound(String),

    #[error("theater '{theater}' is not showing '{movie}'")]
    TheaterNotShowingMovie { movie: String, theater: String },

    #[error("seat {seat} is out of valid range 1..={capacity}")]
    InvalidSeat { seat: u32, capacity: u32 },

    #[error("seat {0} is not available")]
    SeatUnavailable(u32),

    #[error("seat {0} was requested more than once")]
    DuplicateSeat(u32),

    #[error("no seats requested")]
    EmptyRequest,
}

impl BookingError {
    /// Movie, theater, or the movie/theater pairing is missing from the catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BookingError::MovieNotFound(_)
                | BookingError::TheaterNotFound(_)
                | BookingError::TheaterNotShowingMovie { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_class_covers_catalog_misses_only() {
        assert!(BookingError::MovieNotFound("X".into()).is_not_found());
        assert!(BookingError::TheaterNotFound("T".into()).is_not_found());
        assert!(BookingError::TheaterNotShowingMovie {
            movie: "X".into(),
            theater: "T".into()
        }
        .is_not_found());
        assert!(!BookingError::SeatUnavailable(4).is_not_found());
        assert!(!BookingError::InvalidSeat { seat: 0, capacity: 20 }.is_not_found());
    }

    #[test]
    fn messages_name_the_seat() {
        assert_eq!(
            BookingError::InvalidSeat { seat: 21, capacity: 20 }.to_string(),
            "seat 21 is out of valid range 1..=20"
        );
        assert_eq!(BookingError::DuplicateSeat(7).to_string(), "seat 7 was requested more than once");
    }
}
