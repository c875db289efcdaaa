use thiserror::Error;

/// 値オブジェクト構築時のバリデーションエラー
///
/// 呼び出し側の入力不正を表す。ビジネス上の結果（予約済み等）とは区別され、
/// 発生した時点で処理を中断する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 識別子が空白
    #[error("{kind} must not be blank")]
    BlankIdentifier { kind: &'static str },

    /// 座席の列がA〜Zの1文字ではない
    #[error("Seat row must be a single letter A-Z, got {0:?}")]
    InvalidSeatRow(String),

    /// 座席番号が1〜50の範囲外
    #[error("Seat number must be between 1 and 50, got {0}")]
    InvalidSeatNumber(u32),

    /// 座席表記（例: "B4"）として解釈できない
    #[error("Invalid seat label: {0:?}")]
    InvalidSeatLabel(String),

    /// 映画タイトルが空白
    #[error("Movie title must not be blank")]
    BlankMovieTitle,

    /// 曜日として解釈できない
    #[error("Unknown day of week: {0:?}")]
    UnknownDay(String),
}
