use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::Serialize;

use super::{HallId, ShowTimeId, ValidationError};

/// 上映情報の参照（予約コンテキスト用の射影）
///
/// 上映スケジュールは外部コンテキストが所有する。
/// 予約コンテキストは照会のたびに新しい値を受け取り、変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowTimeReference {
    id: ShowTimeId,
    movie_title: String,
    start_time: DateTime<Utc>,
    hall_id: HallId,
}

impl ShowTimeReference {
    /// # エラー
    /// 映画タイトルが空白の場合は`BlankMovieTitle`
    pub fn new(
        id: ShowTimeId,
        movie_title: impl Into<String>,
        start_time: DateTime<Utc>,
        hall_id: HallId,
    ) -> Result<Self, ValidationError> {
        let movie_title = movie_title.into();
        if movie_title.trim().is_empty() {
            return Err(ValidationError::BlankMovieTitle);
        }

        Ok(Self {
            id,
            movie_title,
            start_time,
            hall_id,
        })
    }

    pub fn id(&self) -> &ShowTimeId {
        &self.id
    }

    pub fn movie_title(&self) -> &str {
        &self.movie_title
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn hall_id(&self) -> &HallId {
        &self.hall_id
    }

    /// 上映開始の曜日
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }
}

/// 曜日名を解釈する
///
/// 英語の曜日名または3文字の略称を大文字小文字を区別せず受け付ける
/// （例: "monday", "Mon"）。
pub fn parse_weekday(day: &str) -> Result<Weekday, ValidationError> {
    day.trim()
        .parse::<Weekday>()
        .map_err(|_| ValidationError::UnknownDay(day.to_string()))
}

/// 曜日の表示名（例: "Monday"）
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
