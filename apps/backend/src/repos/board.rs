//! Edition data: board spaces and card definitions.
//!
//! These rows are shared by every game and change only through migrations or
//! admin tooling, so the SeaORM models are returned as they are.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::board_sea as board_adapter;
use crate::entities::card_definitions::DeckType;
use crate::entities::{board_space_definitions, card_definitions};
use crate::errors::domain::{DomainError, NotFoundKind};

pub use board_adapter::{BoardSpaceCreate, CardCreate};

pub async fn list_spaces<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<board_space_definitions::Model>, DomainError> {
    Ok(board_adapter::list_spaces(conn).await?)
}

pub async fn list_ownable_spaces<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<board_space_definitions::Model>, DomainError> {
    Ok(board_adapter::list_ownable_spaces(conn).await?)
}

pub async fn find_space_by_index<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    space_index: u8,
) -> Result<Option<board_space_definitions::Model>, DomainError> {
    Ok(board_adapter::find_space_by_index(conn, space_index as i16).await?)
}

pub async fn require_space_by_index<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    space_index: u8,
) -> Result<board_space_definitions::Model, DomainError> {
    find_space_by_index(conn, space_index).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::BoardSpace,
            format!("No board space at index {space_index}"),
        )
    })
}

pub async fn create_space(
    txn: &DatabaseTransaction,
    dto: BoardSpaceCreate,
) -> Result<board_space_definitions::Model, DomainError> {
    Ok(board_adapter::create_space(txn, dto).await?)
}

pub async fn delete_space(txn: &DatabaseTransaction, id: i64) -> Result<bool, DomainError> {
    Ok(board_adapter::delete_space(txn, id).await?)
}

pub async fn list_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck: DeckType,
) -> Result<Vec<card_definitions::Model>, DomainError> {
    Ok(board_adapter::list_cards(conn, deck).await?)
}

pub async fn find_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<card_definitions::Model>, DomainError> {
    Ok(board_adapter::find_card(conn, id).await?)
}

pub async fn create_card(
    txn: &DatabaseTransaction,
    dto: CardCreate,
) -> Result<card_definitions::Model, DomainError> {
    Ok(board_adapter::create_card(txn, dto).await?)
}

pub async fn delete_card(txn: &DatabaseTransaction, id: i64) -> Result<bool, DomainError> {
    Ok(board_adapter::delete_card(txn, id).await?)
}
