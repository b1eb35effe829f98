pub mod seat;
pub mod catalog;
pub mod booking;

pub use seat::{SeatNumber, SeatTable};
pub use catalog::CatalogEntry;
pub use booking::Booking;
