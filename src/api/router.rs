use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_booking, get_booking_by_id, get_seat_availability, list_show_times,
};

/// Creates the API router with all booking endpoints
///
/// Command endpoints (Write operations):
/// - POST /bookings - Book a seat
///
/// Query endpoints (Read operations):
/// - GET /showtimes?day=monday - List show times for a day of the week
/// - GET /showtimes/:id/seats - Seat availability of a show time
/// - GET /bookings/:id - Get booking details
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/bookings", post(create_booking))
        // Query endpoints (Read operations)
        .route("/bookings/:id", get(get_booking_by_id))
        .route("/showtimes", get(list_show_times))
        .route("/showtimes/:id/seats", get(get_seat_availability))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
