//! DTOs for games_sea adapter.

use time::OffsetDateTime;

use crate::entities::games::GameStatus;

/// DTO for creating the game of a room that has just started.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub room_id: i64,
    pub current_player_id: Option<i64>,
}

impl GameCreate {
    pub fn new(room_id: i64) -> Self {
        Self {
            room_id,
            current_player_id: None,
        }
    }

    pub fn with_current_player(mut self, player_id: i64) -> Self {
        self.current_player_id = Some(player_id);
        self
    }
}

/// Partial update of a game with optimistic locking.
///
/// Only fields that are `Some` are written; all of them land together with a
/// single version increment. Nullable columns use a nested option:
/// `None` = no change, `Some(None)` = clear, `Some(Some(v))` = set.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: i64,
    pub status: Option<GameStatus>,
    pub current_turn: Option<i32>,
    pub current_player_id: Option<Option<i64>>,
    pub winner_player_id: Option<Option<i64>>,
    pub ended_at: Option<Option<OffsetDateTime>>,
    pub expected_version: i32,
}

impl GameUpdate {
    pub fn new(id: i64, expected_version: i32) -> Self {
        Self {
            id,
            status: None,
            current_turn: None,
            current_player_id: None,
            winner_player_id: None,
            ended_at: None,
            expected_version,
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_current_turn(mut self, turn: i32) -> Self {
        self.current_turn = Some(turn);
        self
    }

    pub fn with_current_player(mut self, player_id: Option<i64>) -> Self {
        self.current_player_id = Some(player_id);
        self
    }

    pub fn with_winner(mut self, player_id: Option<i64>) -> Self {
        self.winner_player_id = Some(player_id);
        self
    }

    pub fn with_ended_at(mut self, ended_at: Option<OffsetDateTime>) -> Self {
        self.ended_at = Some(ended_at);
        self
    }
}
