//! SeaORM adapter for the per-game event log. Entries are append-only.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entities::game_event_logs;

pub async fn append<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    turn_number: i32,
    event_type: &str,
    payload: serde_json::Value,
) -> Result<game_event_logs::Model, DbErr> {
    game_event_logs::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        turn_number: Set(turn_number),
        event_type: Set(event_type.to_string()),
        payload: Set(payload),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// Events with an id greater than `after_id`, oldest first.
///
/// Pass `0` to read from the start; feed the last returned id back in to page.
pub async fn list_since<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    after_id: i64,
    limit: u64,
) -> Result<Vec<game_event_logs::Model>, DbErr> {
    game_event_logs::Entity::find()
        .filter(game_event_logs::Column::GameId.eq(game_id))
        .filter(game_event_logs::Column::Id.gt(after_id))
        .order_by_asc(game_event_logs::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}
