use super::ShowTimeCatalog;
use crate::domain::{HallId, Seat, ShowTimeId, ShowTimeReference, ValidationError};
use chrono::{DateTime, Datelike, Days, NaiveTime, Utc};

/// デモ用の上映作品（曜日ごとに1本）
const DEMO_FILMS: [&str; 7] = [
    "Metropolis",
    "Nosferatu",
    "The General",
    "Sunrise",
    "Modern Times",
    "M",
    "The Passion of Joan of Arc",
];

/// デモ用カタログの作成
///
/// `today` を含む週の月曜日から1週間分の上映を登録する。
///
/// - hall-1: A〜B列は各10席、C列は8席（計28席）
/// - hall-2: A〜E列は各12席（計60席）
///
/// 毎日18:00にhall-1、21:00にhall-2で上映する。
pub fn demo_catalog(today: DateTime<Utc>) -> Result<ShowTimeCatalog, ValidationError> {
    let catalog = ShowTimeCatalog::new();

    let small_hall = HallId::new("hall-1")?;
    let large_hall = HallId::new("hall-2")?;
    catalog.add_hall(
        small_hall.clone(),
        Seat::layout(&[('A', 10), ('B', 10), ('C', 8)])?,
    );
    catalog.add_hall(
        large_hall.clone(),
        Seat::layout(&[('A', 12), ('B', 12), ('C', 12), ('D', 12), ('E', 12)])?,
    );

    let monday = today.date_naive() - Days::new(u64::from(today.weekday().num_days_from_monday()));

    for (offset, film) in DEMO_FILMS.iter().enumerate() {
        let date = monday + Days::new(offset as u64);
        let day = date.format("%a").to_string().to_lowercase();

        for (hour, hall) in [(18, &small_hall), (21, &large_hall)] {
            let start_time = date
                .and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default())
                .and_utc();
            let id = ShowTimeId::new(format!("{}-{}-{}", day, hour, hall))?;
            catalog.add_show_time(ShowTimeReference::new(id, *film, start_time, hall.clone())?);
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ShowTimeLookup;
    use chrono::{TimeZone, Weekday};

    #[tokio::test]
    async fn test_demo_catalog_covers_every_day() {
        // 2026-10-17は土曜日
        let today = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
        let catalog = demo_catalog(today).unwrap();

        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(catalog.find_by_day(day).await.unwrap().len(), 2);
        }
    }

    #[tokio::test]
    async fn test_demo_catalog_hall_sizes() {
        let today = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
        let catalog = demo_catalog(today).unwrap();

        let small = ShowTimeId::new("mon-18-hall-1").unwrap();
        let large = ShowTimeId::new("mon-21-hall-2").unwrap();
        assert_eq!(catalog.get_all_seats_for_show_time(&small).await.unwrap().len(), 28);
        assert_eq!(catalog.get_all_seats_for_show_time(&large).await.unwrap().len(), 60);

        let monday = catalog.find_by_id(&small).await.unwrap().unwrap();
        assert_eq!(monday.movie_title(), "Metropolis");
        assert_eq!(
            monday.start_time(),
            Utc.with_ymd_and_hms(2026, 10, 12, 18, 0, 0).unwrap()
        );
    }
}
