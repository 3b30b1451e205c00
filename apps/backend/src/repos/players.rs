//! Per-game player state repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::game_players_sea as players_adapter;
use crate::entities::game_players;
use crate::errors::domain::DomainError;

pub use players_adapter::GamePlayerUpdate;

/// A player's standing in one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub game_id: i64,
    pub player_id: i64,
    pub turn_order: u8,
    pub cash: i32,
    pub position: u8,
    pub in_jail: bool,
    pub jail_turns: u8,
    pub consecutive_doubles: u8,
    pub auto_roll_strikes: u8,
    pub is_bankrupt: bool,
    pub version: i32,
}

impl From<game_players::Model> for PlayerState {
    fn from(model: game_players::Model) -> Self {
        Self {
            game_id: model.game_id,
            player_id: model.player_id,
            turn_order: model.turn_order as u8,
            cash: model.cash,
            position: model.position as u8,
            in_jail: model.in_jail,
            jail_turns: model.jail_turns as u8,
            consecutive_doubles: model.consecutive_doubles as u8,
            auto_roll_strikes: model.auto_roll_strikes as u8,
            is_bankrupt: model.is_bankrupt,
            version: model.version,
        }
    }
}

pub async fn create_player(
    txn: &DatabaseTransaction,
    game_id: i64,
    player_id: i64,
    turn_order: u8,
    starting_cash: i32,
) -> Result<PlayerState, DomainError> {
    let dto = players_adapter::GamePlayerCreate {
        game_id,
        player_id,
        turn_order: turn_order as i16,
        cash: starting_cash,
    };
    Ok(PlayerState::from(players_adapter::create_player(txn, dto).await?))
}

pub async fn find_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Option<PlayerState>, DomainError> {
    let player = players_adapter::find_player(conn, game_id, player_id).await?;
    Ok(player.map(PlayerState::from))
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<PlayerState, DomainError> {
    let player = players_adapter::require_player(conn, game_id, player_id).await?;
    Ok(PlayerState::from(player))
}

/// Players in turn order.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<PlayerState>, DomainError> {
    let players = players_adapter::list_by_game(conn, game_id).await?;
    Ok(players.into_iter().map(PlayerState::from).collect())
}

pub async fn update_player(
    txn: &DatabaseTransaction,
    dto: GamePlayerUpdate,
) -> Result<PlayerState, DomainError> {
    Ok(PlayerState::from(players_adapter::update_player(txn, dto).await?))
}
