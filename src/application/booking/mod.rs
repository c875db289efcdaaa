mod availability;
mod booking_service;
mod outcome;

pub use availability::compute_availability;
pub use booking_service::book_seat;
pub use outcome::BookingOutcome;
