//! SeaORM adapter for room seating.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::not_found;
use crate::entities::room_players;

pub mod dto;

pub use dto::RoomPlayerCreate;

pub async fn add_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoomPlayerCreate,
) -> Result<room_players::Model, DbErr> {
    room_players::ActiveModel {
        room_id: Set(dto.room_id),
        player_id: Set(dto.player_id),
        seat: Set(dto.seat),
        turn_order: Set(dto.turn_order),
        token: Set(dto.token),
        is_connected: Set(true),
        joined_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    player_id: i64,
) -> Result<Option<room_players::Model>, DbErr> {
    room_players::Entity::find_by_id((room_id, player_id))
        .one(conn)
        .await
}

pub async fn list_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<room_players::Model>, DbErr> {
    room_players::Entity::find()
        .filter(room_players::Column::RoomId.eq(room_id))
        .order_by_asc(room_players::Column::Seat)
        .all(conn)
        .await
}

pub async fn set_connected<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    player_id: i64,
    connected: bool,
) -> Result<room_players::Model, DbErr> {
    let result = room_players::Entity::update_many()
        .col_expr(room_players::Column::IsConnected, Expr::val(connected).into())
        .filter(room_players::Column::RoomId.eq(room_id))
        .filter(room_players::Column::PlayerId.eq(player_id))
        .exec(conn)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found("Room player"));
    }
    find_member(conn, room_id, player_id)
        .await?
        .ok_or_else(|| not_found("Room player"))
}

/// Returns false when the player was not seated in the room.
pub async fn remove_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    player_id: i64,
) -> Result<bool, DbErr> {
    let result = room_players::Entity::delete_by_id((room_id, player_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}
