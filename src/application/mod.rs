pub mod booking;
mod dependencies;
mod errors;
pub mod showtime;

pub use dependencies::ServiceDependencies;
pub use errors::{BookingApplicationError, Result};
