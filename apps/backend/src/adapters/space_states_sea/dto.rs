//! DTOs for space_states_sea adapter.

/// Partial update of a space's ownership and development.
#[derive(Debug, Clone)]
pub struct SpaceStateUpdate {
    pub game_id: i64,
    pub board_space_id: i64,
    /// `Some(None)` returns the space to the bank.
    pub owner_player_id: Option<Option<i64>>,
    pub houses: Option<i16>,
    pub has_hotel: Option<bool>,
    pub is_mortgaged: Option<bool>,
    pub expected_version: i32,
}

impl SpaceStateUpdate {
    pub fn new(game_id: i64, board_space_id: i64, expected_version: i32) -> Self {
        Self {
            game_id,
            board_space_id,
            owner_player_id: None,
            houses: None,
            has_hotel: None,
            is_mortgaged: None,
            expected_version,
        }
    }

    pub fn with_owner(mut self, owner: Option<i64>) -> Self {
        self.owner_player_id = Some(owner);
        self
    }

    pub fn with_houses(mut self, houses: i16) -> Self {
        self.houses = Some(houses);
        self
    }

    pub fn with_hotel(mut self, has_hotel: bool) -> Self {
        self.has_hotel = Some(has_hotel);
        self
    }

    pub fn with_mortgaged(mut self, is_mortgaged: bool) -> Self {
        self.is_mortgaged = Some(is_mortgaged);
        self
    }
}
