use serde::{Deserialize, Serialize};

use super::{CustomerId, ShowTimeId};

/// コマンド：座席を予約する
///
/// 座席は未検証の列・番号のまま受け取り、上映の存在確認の後に
/// `Seat`として構築される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSeat {
    pub customer_id: CustomerId,
    pub show_time_id: ShowTimeId,
    pub seat_row: String,
    pub seat_number: u32,
}
