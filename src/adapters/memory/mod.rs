pub mod booking_store;
pub mod demo;
pub mod show_time_catalog;

#[allow(unused_imports)]
pub use booking_store::BookingStore;
#[allow(unused_imports)]
pub use show_time_catalog::ShowTimeCatalog;
