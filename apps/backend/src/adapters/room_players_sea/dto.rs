//! DTOs for room_players_sea adapter.

use crate::entities::room_players::PlayerToken;

#[derive(Debug, Clone)]
pub struct RoomPlayerCreate {
    pub room_id: i64,
    pub player_id: i64,
    pub seat: i16,
    pub turn_order: i16,
    pub token: PlayerToken,
}
