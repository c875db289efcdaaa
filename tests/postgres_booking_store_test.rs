//! PostgreSQLアダプターのテスト
//!
//! DATABASE_URLで接続できるデータベースが必要なため、通常は無視される。
//! 実行するには `cargo test -- --ignored` を使う。

use chrono::{TimeZone, Utc, Weekday};
use cinema_booking_ddd::adapters::postgres::{PostgresBookingStore, PostgresShowTimeLookup};
use cinema_booking_ddd::domain::{CustomerId, Seat, ShowTimeId, booking::book_seat};
use cinema_booking_ddd::ports::*;
use sqlx::PgPool;

mod common;

/// テストデータの投入
///
/// テストの独立性を保つため、既存データを削除してから
/// 28席のスクリーンと月曜日の上映を1つ登録する。
async fn seed_database(pool: &PgPool) {
    sqlx::query("TRUNCATE TABLE bookings, showtimes, hall_seats CASCADE")
        .execute(pool)
        .await
        .expect("Failed to truncate tables");

    for seat in common::standard_hall() {
        sqlx::query("INSERT INTO hall_seats (hall_id, seat_row, seat_number) VALUES ($1, $2, $3)")
            .bind(common::HALL_ID)
            .bind(seat.row().to_string())
            .bind(i16::from(seat.number()))
            .execute(pool)
            .await
            .expect("Failed to insert hall seat");
    }

    sqlx::query(
        "INSERT INTO showtimes (showtime_id, movie_title, start_time, hall_id) VALUES ($1, $2, $3, $4)",
    )
    .bind(common::SHOW_TIME_ID)
    .bind(common::MOVIE_TITLE)
    .bind(Utc.with_ymd_and_hms(2026, 10, 19, 18, 30, 0).unwrap())
    .bind(common::HALL_ID)
    .execute(pool)
    .await
    .expect("Failed to insert show time");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_postgres_show_time_lookup() {
    let pool = common::create_test_pool().await;
    seed_database(&pool).await;
    let lookup = PostgresShowTimeLookup::new(pool);

    let show_time_id = ShowTimeId::new(common::SHOW_TIME_ID).unwrap();
    let show_time = lookup.find_by_id(&show_time_id).await.unwrap().unwrap();
    assert_eq!(show_time.movie_title(), common::MOVIE_TITLE);
    assert_eq!(show_time.hall_id().value(), common::HALL_ID);

    let seats = lookup.get_all_seats_for_show_time(&show_time_id).await.unwrap();
    assert_eq!(seats, common::standard_hall());

    let missing = ShowTimeId::new("missing").unwrap();
    assert!(lookup.find_by_id(&missing).await.unwrap().is_none());
    assert!(lookup.get_all_seats_for_show_time(&missing).await.unwrap().is_empty());

    assert_eq!(lookup.find_by_day(Weekday::Mon).await.unwrap().len(), 1);
    assert!(lookup.find_by_day(Weekday::Tue).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_postgres_booking_store_rejects_duplicate_seat() {
    let pool = common::create_test_pool().await;
    seed_database(&pool).await;
    let store = PostgresBookingStore::new(pool);

    let show_time_id = ShowTimeId::new(common::SHOW_TIME_ID).unwrap();
    let seat: Seat = "B4".parse().unwrap();

    let (first, _) = book_seat(
        CustomerId::new("Alice").unwrap(),
        show_time_id.clone(),
        seat,
        common::fixed_now(),
    );
    let first_id = first.booking_id().clone();
    assert!(matches!(
        store.save(first).await.unwrap(),
        SaveBooking::Saved(_)
    ));

    let (second, _) = book_seat(
        CustomerId::new("Bob").unwrap(),
        show_time_id.clone(),
        seat,
        common::fixed_now(),
    );
    assert_eq!(store.save(second).await.unwrap(), SaveBooking::SeatTaken);

    assert!(store.exists_booking_for_seat(&show_time_id, &seat).await.unwrap());
    assert_eq!(
        store.find_booked_seats_for_show_time(&show_time_id).await.unwrap(),
        vec![seat]
    );

    let stored = store.find_by_id(&first_id).await.unwrap().unwrap();
    assert_eq!(stored.customer_id().value(), "Alice");
    assert_eq!(stored.seat(), seat);
    assert_eq!(stored.created_at(), common::fixed_now());
}
