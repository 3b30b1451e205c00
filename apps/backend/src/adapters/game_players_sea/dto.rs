//! DTOs for game_players_sea adapter.

#[derive(Debug, Clone)]
pub struct GamePlayerCreate {
    pub game_id: i64,
    pub player_id: i64,
    pub turn_order: i16,
    pub cash: i32,
}

/// Partial update of a player's game state; `None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct GamePlayerUpdate {
    pub game_id: i64,
    pub player_id: i64,
    pub cash: Option<i32>,
    pub position: Option<i16>,
    pub in_jail: Option<bool>,
    pub jail_turns: Option<i16>,
    pub consecutive_doubles: Option<i16>,
    pub auto_roll_strikes: Option<i16>,
    pub is_bankrupt: Option<bool>,
    pub expected_version: i32,
}

impl GamePlayerUpdate {
    pub fn new(game_id: i64, player_id: i64, expected_version: i32) -> Self {
        Self {
            game_id,
            player_id,
            cash: None,
            position: None,
            in_jail: None,
            jail_turns: None,
            consecutive_doubles: None,
            auto_roll_strikes: None,
            is_bankrupt: None,
            expected_version,
        }
    }

    pub fn with_cash(mut self, cash: i32) -> Self {
        self.cash = Some(cash);
        self
    }

    pub fn with_position(mut self, position: i16) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_jail(mut self, in_jail: bool, jail_turns: i16) -> Self {
        self.in_jail = Some(in_jail);
        self.jail_turns = Some(jail_turns);
        self
    }

    pub fn with_consecutive_doubles(mut self, count: i16) -> Self {
        self.consecutive_doubles = Some(count);
        self
    }

    pub fn with_auto_roll_strikes(mut self, strikes: i16) -> Self {
        self.auto_roll_strikes = Some(strikes);
        self
    }

    pub fn with_bankrupt(mut self, is_bankrupt: bool) -> Self {
        self.is_bankrupt = Some(is_bankrupt);
        self
    }
}
