//! DTOs for rooms_sea adapter.

#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub code: String,
    pub owner_id: i64,
    pub max_players: i16,
}

impl RoomCreate {
    pub fn new(code: impl Into<String>, owner_id: i64, max_players: i16) -> Self {
        Self {
            code: code.into(),
            owner_id,
            max_players,
        }
    }
}
