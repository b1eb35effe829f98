use std::collections::HashSet;

use crate::error::BookingError;

/// 1-based seat number within a showing.
pub type SeatNumber = u32;

/// Checks the shape of a booking request against a seat map of `capacity` seats:
/// non-empty, every seat in `1..=capacity`, no seat listed twice.
pub fn validate_request(seats: &[SeatNumber], capacity: u32) -> Result<(), BookingError> {
    if seats.is_empty() {
        return Err(BookingError::EmptyRequest);
    }

    let mut seen = HashSet::with_capacity(seats.len());
    for &seat in seats {
        if seat < 1 || seat > capacity {
            return Err(BookingError::InvalidSeat { seat, capacity });
        }
        if !seen.insert(seat) {
            return Err(BookingError::DuplicateSeat(seat));
        }
    }
    Ok(())
}

/// Availability of every seat in one showing. `true` means free.
///
/// The length never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatTable {
    seats: Vec<bool>,
}

impl SeatTable {
    pub fn new(capacity: u32) -> Self {
        Self {
            seats: vec![true; capacity as usize],
        }
    }

    pub fn capacity(&self) -> u32 {
        self.seats.len() as u32
    }

    pub fn is_available(&self, seat: SeatNumber) -> bool {
        seat >= 1 && self.seats.get(seat as usize - 1).copied().unwrap_or(false)
    }

    /// Free seats in ascending order.
    pub fn available(&self) -> Vec<SeatNumber> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, free)| **free)
            .map(|(i, _)| i as SeatNumber + 1)
            .collect()
    }

    /// Marks every seat in `seats` as booked, or none of them.
    pub fn book(&mut self, seats: &[SeatNumber]) -> Result<(), BookingError> {
        validate_request(seats, self.capacity())?;

        if let Some(&taken) = seats.iter().find(|&&seat| !self.is_available(seat)) {
            return Err(BookingError::SeatUnavailable(taken));
        }

        for &seat in seats {
            self.seats[seat as usize - 1] = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_fully_available() {
        let table = SeatTable::new(5);
        assert_eq!(table.capacity(), 5);
        assert_eq!(table.available(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn booking_removes_seats_from_available() {
        let mut table = SeatTable::new(5);
        table.book(&[2, 4]).unwrap();
        assert_eq!(table.available(), vec![1, 3, 5]);
        assert!(!table.is_available(2));
        assert!(table.is_available(3));
    }

    #[test]
    fn out_of_range_seats_are_never_available() {
        let table = SeatTable::new(3);
        assert!(!table.is_available(0));
        assert!(!table.is_available(4));
    }

    #[test]
    fn failed_booking_changes_nothing() {
        let mut table = SeatTable::new(5);
        table.book(&[3]).unwrap();

        assert_eq!(table.book(&[1, 3]), Err(BookingError::SeatUnavailable(3)));
        assert_eq!(table.book(&[1, 6]), Err(BookingError::InvalidSeat { seat: 6, capacity: 5 }));
        assert_eq!(table.book(&[1, 2, 1]), Err(BookingError::DuplicateSeat(1)));
        assert_eq!(table.available(), vec![1, 2, 4, 5]);
    }

    #[test]
    fn request_shape_is_checked_before_availability() {
        assert_eq!(validate_request(&[], 20), Err(BookingError::EmptyRequest));
        assert_eq!(validate_request(&[0], 20), Err(BookingError::InvalidSeat { seat: 0, capacity: 20 }));
        assert_eq!(validate_request(&[21], 20), Err(BookingError::InvalidSeat { seat: 21, capacity: 20 }));
        assert!(validate_request(&[1, 20], 20).is_ok());
    }
}
