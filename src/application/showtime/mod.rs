mod listing;

pub use listing::list_show_times_for_day;
