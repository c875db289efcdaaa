pub mod booking_store;
pub mod show_time_lookup;

// パブリックに型を再エクスポート
pub use booking_store::BookingStore as PostgresBookingStore;
pub use show_time_lookup::ShowTimeLookup as PostgresShowTimeLookup;
