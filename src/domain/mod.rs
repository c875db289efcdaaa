pub mod availability;
pub mod booking;
pub mod commands;
pub mod errors;
pub mod events;
pub mod showtime;
pub mod value_objects;

pub use availability::SeatAvailability;
pub use booking::Booking;
pub use errors::*;
pub use events::*;
pub use showtime::ShowTimeReference;
pub use value_objects::*;
