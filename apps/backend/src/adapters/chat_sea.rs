//! SeaORM adapter for room chat. Messages are append-only.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entities::chat_messages;

pub async fn append<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    player_id: Option<i64>,
    body: &str,
) -> Result<chat_messages::Model, DbErr> {
    chat_messages::ActiveModel {
        id: NotSet,
        room_id: Set(room_id),
        player_id: Set(player_id),
        body: Set(body.to_string()),
        sent_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// The newest `limit` messages of a room, oldest first.
pub async fn list_recent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    limit: u64,
) -> Result<Vec<chat_messages::Model>, DbErr> {
    let mut rows = chat_messages::Entity::find()
        .filter(chat_messages::Column::RoomId.eq(room_id))
        .order_by_desc(chat_messages::Column::Id)
        .limit(limit)
        .all(conn)
        .await?;
    rows.reverse();
    Ok(rows)
}
