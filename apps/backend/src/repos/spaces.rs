//! Per-game board space state repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::space_states_sea as spaces_adapter;
use crate::entities::game_space_states;
use crate::errors::domain::DomainError;

pub use spaces_adapter::SpaceStateUpdate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceState {
    pub game_id: i64,
    pub board_space_id: i64,
    pub owner_player_id: Option<i64>,
    pub houses: u8,
    pub has_hotel: bool,
    pub is_mortgaged: bool,
    pub version: i32,
}

impl SpaceState {
    pub fn is_owned(&self) -> bool {
        self.owner_player_id.is_some()
    }
}

impl From<game_space_states::Model> for SpaceState {
    fn from(model: game_space_states::Model) -> Self {
        Self {
            game_id: model.game_id,
            board_space_id: model.board_space_id,
            owner_player_id: model.owner_player_id,
            houses: model.houses as u8,
            has_hotel: model.has_hotel,
            is_mortgaged: model.is_mortgaged,
            version: model.version,
        }
    }
}

pub async fn create_space_state(
    txn: &DatabaseTransaction,
    game_id: i64,
    board_space_id: i64,
) -> Result<SpaceState, DomainError> {
    let state = spaces_adapter::create_space_state(txn, game_id, board_space_id).await?;
    Ok(SpaceState::from(state))
}

pub async fn find_space_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board_space_id: i64,
) -> Result<Option<SpaceState>, DomainError> {
    let state = spaces_adapter::find_space_state(conn, game_id, board_space_id).await?;
    Ok(state.map(SpaceState::from))
}

pub async fn require_space_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board_space_id: i64,
) -> Result<SpaceState, DomainError> {
    let state = spaces_adapter::require_space_state(conn, game_id, board_space_id).await?;
    Ok(SpaceState::from(state))
}

pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<SpaceState>, DomainError> {
    let states = spaces_adapter::list_by_game(conn, game_id).await?;
    Ok(states.into_iter().map(SpaceState::from).collect())
}

pub async fn list_owned_by<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Vec<SpaceState>, DomainError> {
    let states = spaces_adapter::list_owned_by(conn, game_id, player_id).await?;
    Ok(states.into_iter().map(SpaceState::from).collect())
}

/// Optimistic update; house/hotel/mortgage combinations are validated first.
pub async fn update_space_state(
    txn: &DatabaseTransaction,
    dto: SpaceStateUpdate,
) -> Result<SpaceState, DomainError> {
    Ok(SpaceState::from(spaces_adapter::update_space_state(txn, dto).await?))
}
