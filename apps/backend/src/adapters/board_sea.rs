//! SeaORM adapter for the static edition data: board spaces and card definitions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::restricted_on_delete;
use crate::entities::board_space_definitions::{self, ColorGroup, SpaceType};
use crate::entities::card_definitions::{self, CardAction, DeckType};

#[derive(Debug, Clone)]
pub struct BoardSpaceCreate {
    pub space_index: i16,
    pub name: String,
    pub space_type: SpaceType,
    pub color_group: Option<ColorGroup>,
    pub price: Option<i32>,
    pub house_cost: Option<i32>,
    pub mortgage_value: Option<i32>,
    pub tax_amount: Option<i32>,
    pub rent_table: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct CardCreate {
    pub deck_type: DeckType,
    pub sequence: i16,
    pub text: String,
    pub action_code: CardAction,
    pub parameters: serde_json::Value,
}

/// All spaces in board order.
pub async fn list_spaces<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<board_space_definitions::Model>, DbErr> {
    board_space_definitions::Entity::find()
        .order_by_asc(board_space_definitions::Column::SpaceIndex)
        .all(conn)
        .await
}

/// Purchasable spaces in board order.
pub async fn list_ownable_spaces<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<board_space_definitions::Model>, DbErr> {
    let spaces = list_spaces(conn).await?;
    Ok(spaces
        .into_iter()
        .filter(|s| s.space_type.is_ownable())
        .collect())
}

pub async fn find_space_by_index<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    space_index: i16,
) -> Result<Option<board_space_definitions::Model>, DbErr> {
    board_space_definitions::Entity::find()
        .filter(board_space_definitions::Column::SpaceIndex.eq(space_index))
        .one(conn)
        .await
}

pub async fn find_space_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<board_space_definitions::Model>, DbErr> {
    board_space_definitions::Entity::find_by_id(id).one(conn).await
}

pub async fn create_space<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BoardSpaceCreate,
) -> Result<board_space_definitions::Model, DbErr> {
    board_space_definitions::ActiveModel {
        id: NotSet,
        space_index: Set(dto.space_index),
        name: Set(dto.name),
        space_type: Set(dto.space_type),
        color_group: Set(dto.color_group),
        price: Set(dto.price),
        house_cost: Set(dto.house_cost),
        mortgage_value: Set(dto.mortgage_value),
        tax_amount: Set(dto.tax_amount),
        rent_table: Set(dto.rent_table),
    }
    .insert(conn)
    .await
}

/// Fails with a restricted-reference error while any game or trade points at the space.
pub async fn delete_space<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DbErr> {
    let result = board_space_definitions::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(|e| restricted_on_delete(e, "board_space_definitions"))?;
    Ok(result.rows_affected > 0)
}

/// Cards of one deck in printed sequence.
pub async fn list_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck: DeckType,
) -> Result<Vec<card_definitions::Model>, DbErr> {
    card_definitions::Entity::find()
        .filter(card_definitions::Column::DeckType.eq(deck))
        .order_by_asc(card_definitions::Column::Sequence)
        .all(conn)
        .await
}

pub async fn find_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<card_definitions::Model>, DbErr> {
    card_definitions::Entity::find_by_id(id).one(conn).await
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CardCreate,
) -> Result<card_definitions::Model, DbErr> {
    card_definitions::ActiveModel {
        id: NotSet,
        deck_type: Set(dto.deck_type),
        sequence: Set(dto.sequence),
        text: Set(dto.text),
        action_code: Set(dto.action_code),
        parameters: Set(dto.parameters),
    }
    .insert(conn)
    .await
}

/// Fails with a restricted-reference error while a game deck still holds the card.
pub async fn delete_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DbErr> {
    let result = card_definitions::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(|e| restricted_on_delete(e, "card_definitions"))?;
    Ok(result.rows_affected > 0)
}
