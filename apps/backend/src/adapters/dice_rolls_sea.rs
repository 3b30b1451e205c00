//! SeaORM adapter for dice rolls. Rolls are append-only.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::dice_rolls;

#[derive(Debug, Clone)]
pub struct DiceRollCreate {
    pub game_id: i64,
    pub player_id: i64,
    pub turn_number: i32,
    pub die_one: i16,
    pub die_two: i16,
    pub is_auto_roll: bool,
}

pub async fn append<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DiceRollCreate,
) -> Result<dice_rolls::Model, DbErr> {
    dice_rolls::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        player_id: Set(Some(dto.player_id)),
        turn_number: Set(dto.turn_number),
        die_one: Set(dto.die_one),
        die_two: Set(dto.die_two),
        is_auto_roll: Set(dto.is_auto_roll),
        rolled_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// All rolls of a game in the order they were made.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<dice_rolls::Model>, DbErr> {
    dice_rolls::Entity::find()
        .filter(dice_rolls::Column::GameId.eq(game_id))
        .order_by_asc(dice_rolls::Column::Id)
        .all(conn)
        .await
}

pub async fn list_for_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    turn_number: i32,
) -> Result<Vec<dice_rolls::Model>, DbErr> {
    dice_rolls::Entity::find()
        .filter(dice_rolls::Column::GameId.eq(game_id))
        .filter(dice_rolls::Column::TurnNumber.eq(turn_number))
        .order_by_asc(dice_rolls::Column::Id)
        .all(conn)
        .await
}
