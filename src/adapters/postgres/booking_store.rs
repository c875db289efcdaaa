use super::show_time_lookup::map_row_to_seat;
use crate::domain::{Booking, BookingId, CustomerId, Seat, ShowTimeId};
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result, SaveBooking};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookingに変換する
fn map_row_to_booking(row: &PgRow) -> Result<Booking> {
    let booking_id: String = row.get("booking_id");
    let customer_id: String = row.get("customer_id");
    let show_time_id: String = row.get("showtime_id");

    Ok(Booking::restore(
        BookingId::new(booking_id)?,
        CustomerId::new(customer_id)?,
        map_row_to_seat(row)?,
        ShowTimeId::new(show_time_id)?,
        row.get("created_at"),
    ))
}

/// BookingStoreのPostgreSQL実装
///
/// `uq_bookings_showtime_seat` 制約により、上映と座席の組につき予約は最大1件。
/// `save` は `ON CONFLICT DO NOTHING` でこの制約に依存する。
pub struct BookingStore {
    pool: PgPool,
}

impl BookingStore {
    /// コネクションプールから作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    async fn find_booked_seats_for_show_time(
        &self,
        show_time_id: &ShowTimeId,
    ) -> Result<Vec<Seat>> {
        let rows = sqlx::query(
            r#"
            SELECT seat_row, seat_number
            FROM bookings
            WHERE showtime_id = $1
            ORDER BY seat_row ASC, seat_number ASC
            "#,
        )
        .bind(show_time_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_seat).collect()
    }

    async fn exists_booking_for_seat(
        &self,
        show_time_id: &ShowTimeId,
        seat: &Seat,
    ) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM bookings
                WHERE showtime_id = $1 AND seat_row = $2 AND seat_number = $3
            )
            "#,
        )
        .bind(show_time_id.value())
        .bind(seat.row().to_string())
        .bind(i16::from(seat.number()))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// 座席が空いていれば予約を挿入する
    ///
    /// 影響行数0は一意制約により挿入が拒否されたことを表す。
    async fn save(&self, booking: Booking) -> Result<SaveBooking> {
        let result = sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id,
                customer_id,
                showtime_id,
                seat_row,
                seat_number,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT ON CONSTRAINT uq_bookings_showtime_seat DO NOTHING
            "#,
        )
        .bind(booking.booking_id().value())
        .bind(booking.customer_id().value())
        .bind(booking.show_time_id().value())
        .bind(booking.seat().row().to_string())
        .bind(i16::from(booking.seat().number()))
        .bind(booking.created_at())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(SaveBooking::SeatTaken);
        }

        Ok(SaveBooking::Saved(booking))
    }

    async fn find_by_id(&self, booking_id: &BookingId) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT booking_id, customer_id, showtime_id, seat_row, seat_number, created_at
            FROM bookings
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }
}
