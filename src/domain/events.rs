use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, CustomerId, Seat, ShowTimeId};

/// イベント：座席が予約された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatBooked {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub show_time_id: ShowTimeId,
    pub seat: Seat,
    pub booked_at: DateTime<Utc>,
}
