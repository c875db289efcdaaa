use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

/// 座席番号の上限
pub const MAX_SEAT_NUMBER: u32 = 50;

/// 空白でない文字列であることを検証し、前後の空白を取り除いて返す
fn non_blank(value: String, kind: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankIdentifier { kind });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// 予約ID - 予約集約のID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingId(String);

impl BookingId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(value.into(), "BookingId").map(Self)
    }

    /// 新しい一意なIDを採番する
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// 顧客ID - 顧客管理コンテキストへの参照
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(value.into(), "CustomerId").map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// 上映ID - 上映スケジュールコンテキストへの参照
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShowTimeId(String);

impl ShowTimeId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(value.into(), "ShowTimeId").map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// スクリーンID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HallId(String);

impl HallId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_blank(value.into(), "HallId").map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

macro_rules! string_id_conversions {
    ($($id:ident),*) => {
        $(
            impl TryFrom<String> for $id {
                type Error = ValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$id> for String {
                fn from(id: $id) -> Self {
                    id.0
                }
            }

            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_id_conversions!(BookingId, CustomerId, ShowTimeId, HallId);

/// 座席
///
/// 不変条件：
/// - 列はA〜Zの大文字1文字
/// - 番号は1〜50
///
/// 値が等しければ同じ座席とみなす。列→番号の順で並ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "RawSeat")]
pub struct Seat {
    row: char,
    number: u8,
}

#[derive(Deserialize)]
struct RawSeat {
    row: String,
    number: u32,
}

impl TryFrom<RawSeat> for Seat {
    type Error = ValidationError;

    fn try_from(raw: RawSeat) -> Result<Self, Self::Error> {
        Seat::new(&raw.row, raw.number)
    }
}

impl Seat {
    /// 列と番号から座席を作成する
    ///
    /// # エラー
    /// - 列がA〜Zの1文字でない場合は`InvalidSeatRow`
    /// - 番号が1〜50の範囲外の場合は`InvalidSeatNumber`
    pub fn new(row: &str, number: u32) -> Result<Self, ValidationError> {
        let mut chars = row.chars();
        let row_char = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => c,
            _ => return Err(ValidationError::InvalidSeatRow(row.to_string())),
        };

        if !(1..=MAX_SEAT_NUMBER).contains(&number) {
            return Err(ValidationError::InvalidSeatNumber(number));
        }

        Ok(Self {
            row: row_char,
            number: number as u8,
        })
    }

    /// 列ごとの座席数からスクリーンの座席一覧を作る
    ///
    /// 例: `[('A', 10), ('B', 8)]` → A1..A10, B1..B8
    pub fn layout(rows: &[(char, u32)]) -> Result<Vec<Seat>, ValidationError> {
        let mut seats = Vec::new();
        for &(row, count) in rows {
            let row = row.to_string();
            for number in 1..=count {
                seats.push(Seat::new(&row, number)?);
            }
        }
        Ok(seats)
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// 表示用の文字列（例: "B4"）
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for Seat {
    type Err = ValidationError;

    /// "B4" のような表記から座席を作る
    ///
    /// 番号は先頭ゼロや符号のない数字のみ受け付ける（"B04" や "B+4" は不正）。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let invalid = || ValidationError::InvalidSeatLabel(s.to_string());

        let mut chars = label.chars();
        let row = chars.next().ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let number: u32 = digits.parse().map_err(|_| invalid())?;

        Seat::new(&row.to_string(), number)
    }
}

impl Serialize for Seat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Seat", 2)?;
        state.serialize_field("row", &self.row.to_string())?;
        state.serialize_field("number", &self.number)?;
        state.end()
    }
}
