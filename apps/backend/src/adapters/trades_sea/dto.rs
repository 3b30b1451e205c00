//! DTOs for trades_sea adapter.

use crate::entities::trade_offer_properties::TradeDirection;

#[derive(Debug, Clone)]
pub struct TradeCreate {
    pub game_id: i64,
    pub offerer_id: i64,
    pub recipient_id: i64,
    pub cash_from_offerer: i32,
    pub cash_from_recipient: i32,
    /// Board space ids changing hands and which way each one moves.
    pub properties: Vec<(i64, TradeDirection)>,
}
