use crate::domain::{HallId, Seat, ShowTimeId, ShowTimeReference};
use crate::ports::show_time_lookup::{Result, ShowTimeLookup as ShowTimeLookupTrait};
use async_trait::async_trait;
use chrono::Weekday;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをShowTimeReferenceに変換する
fn map_row_to_show_time(row: &PgRow) -> Result<ShowTimeReference> {
    let show_time_id: String = row.get("showtime_id");
    let movie_title: String = row.get("movie_title");
    let hall_id: String = row.get("hall_id");

    Ok(ShowTimeReference::new(
        ShowTimeId::new(show_time_id)?,
        movie_title,
        row.get("start_time"),
        HallId::new(hall_id)?,
    )?)
}

/// PostgreSQLの行データをSeatに変換する
///
/// 範囲外の座席番号や不正な列はエラーとして扱う。
pub(super) fn map_row_to_seat(row: &PgRow) -> Result<Seat> {
    let seat_row: String = row.get("seat_row");
    let seat_number: i16 = row.get("seat_number");
    let seat_number = u32::try_from(seat_number)?;

    Ok(Seat::new(seat_row.trim(), seat_number)?)
}

/// ShowTimeLookupのPostgreSQL実装
///
/// 上映は `showtimes`、スクリーンの座席は `hall_seats` から読む。
pub struct ShowTimeLookup {
    pool: PgPool,
}

impl ShowTimeLookup {
    /// コネクションプールから作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowTimeLookupTrait for ShowTimeLookup {
    async fn find_by_id(&self, show_time_id: &ShowTimeId) -> Result<Option<ShowTimeReference>> {
        let row = sqlx::query(
            r#"
            SELECT showtime_id, movie_title, start_time, hall_id
            FROM showtimes
            WHERE showtime_id = $1
            "#,
        )
        .bind(show_time_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_show_time).transpose()
    }

    /// 上映スクリーンの座席（列、番号の順）
    async fn get_all_seats_for_show_time(&self, show_time_id: &ShowTimeId) -> Result<Vec<Seat>> {
        let rows = sqlx::query(
            r#"
            SELECT hs.seat_row, hs.seat_number
            FROM showtimes s
            JOIN hall_seats hs ON hs.hall_id = s.hall_id
            WHERE s.showtime_id = $1
            ORDER BY hs.seat_row ASC, hs.seat_number ASC
            "#,
        )
        .bind(show_time_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_seat).collect()
    }

    /// 指定曜日に始まる上映（ISO曜日番号、UTCで判定）
    async fn find_by_day(&self, day: Weekday) -> Result<Vec<ShowTimeReference>> {
        let rows = sqlx::query(
            r#"
            SELECT showtime_id, movie_title, start_time, hall_id
            FROM showtimes
            WHERE EXTRACT(ISODOW FROM start_time AT TIME ZONE 'UTC')::int = $1
            ORDER BY start_time ASC
            "#,
        )
        .bind(day.number_from_monday() as i32)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_show_time).collect()
    }
}
