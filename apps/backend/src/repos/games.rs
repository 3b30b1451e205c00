//! Game repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::games_sea as games_adapter;
use crate::entities::games::{self, GameStatus};
use crate::errors::domain::DomainError;

pub use games_adapter::GameUpdate;

/// One match played out of a room. `version` must be echoed back on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub room_id: i64,
    pub status: GameStatus,
    pub current_turn: i32,
    pub current_player_id: Option<i64>,
    pub winner_player_id: Option<i64>,
    pub started_at: time::OffsetDateTime,
    pub ended_at: Option<time::OffsetDateTime>,
    pub updated_at: time::OffsetDateTime,
    pub version: i32,
}

impl Game {
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            room_id: model.room_id,
            status: model.status,
            current_turn: model.current_turn,
            current_player_id: model.current_player_id,
            winner_player_id: model.winner_player_id,
            started_at: model.started_at,
            ended_at: model.ended_at,
            updated_at: model.updated_at,
            version: model.version,
        }
    }
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    room_id: i64,
    current_player_id: Option<i64>,
) -> Result<Game, DomainError> {
    let mut dto = games_adapter::GameCreate::new(room_id);
    if let Some(player_id) = current_player_id {
        dto = dto.with_current_player(player_id);
    }
    Ok(Game::from(games_adapter::create_game(txn, dto).await?))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    Ok(games_adapter::find_by_id(conn, game_id).await?.map(Game::from))
}

pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    Ok(Game::from(games_adapter::require_game(conn, game_id).await?))
}

pub async fn find_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<Game>, DomainError> {
    Ok(games_adapter::find_by_room(conn, room_id).await?.map(Game::from))
}

/// Update game with optimistic locking.
///
/// All fields set on `dto` land atomically with a single version increment.
pub async fn update_game(txn: &DatabaseTransaction, dto: GameUpdate) -> Result<Game, DomainError> {
    Ok(Game::from(games_adapter::update_game(txn, dto).await?))
}

/// Hand the turn to `player_id` and advance the turn counter.
pub async fn advance_turn(
    txn: &DatabaseTransaction,
    game: &Game,
    player_id: i64,
) -> Result<Game, DomainError> {
    let dto = GameUpdate::new(game.id, game.version)
        .with_current_turn(game.current_turn + 1)
        .with_current_player(Some(player_id));
    update_game(txn, dto).await
}

/// Mark the game finished with an optional winner.
pub async fn finish_game(
    txn: &DatabaseTransaction,
    game: &Game,
    winner_player_id: Option<i64>,
) -> Result<Game, DomainError> {
    let dto = GameUpdate::new(game.id, game.version)
        .with_status(GameStatus::Finished)
        .with_winner(winner_player_id)
        .with_current_player(None)
        .with_ended_at(Some(time::OffsetDateTime::now_utc()));
    update_game(txn, dto).await
}

/// Delete game with optimistic locking; a game that is already gone is fine.
pub async fn delete_game(
    txn: &DatabaseTransaction,
    id: i64,
    expected_version: i32,
) -> Result<(), DomainError> {
    Ok(games_adapter::delete_game(txn, id, expected_version).await?)
}
