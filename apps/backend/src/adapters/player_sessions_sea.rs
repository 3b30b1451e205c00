//! SeaORM adapter for player sessions.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};

use super::{not_found, restricted_on_delete};
use crate::entities::player_sessions;

pub async fn create_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    display_name: &str,
    token_hash: &str,
) -> Result<player_sessions::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    player_sessions::ActiveModel {
        id: NotSet,
        display_name: Set(display_name.to_string()),
        token_hash: Set(token_hash.to_string()),
        created_at: Set(now),
        last_seen_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<player_sessions::Model>, DbErr> {
    player_sessions::Entity::find_by_id(id).one(conn).await
}

pub async fn require_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<player_sessions::Model, DbErr> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found("Session"))
}

pub async fn find_by_token_hash<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    token_hash: &str,
) -> Result<Option<player_sessions::Model>, DbErr> {
    player_sessions::Entity::find()
        .filter(player_sessions::Column::TokenHash.eq(token_hash))
        .one(conn)
        .await
}

/// Bump `last_seen_at` and return the refreshed row.
pub async fn touch<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<player_sessions::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = player_sessions::Entity::update_many()
        .col_expr(player_sessions::Column::LastSeenAt, Expr::val(now).into())
        .filter(player_sessions::Column::Id.eq(id))
        .exec(conn)
        .await?;
    if result.rows_affected == 0 {
        return Err(not_found("Session"));
    }
    require_session(conn, id).await
}

/// Returns false when no such session existed.
pub async fn delete_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DbErr> {
    let result = player_sessions::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(|e| restricted_on_delete(e, "player_sessions"))?;
    Ok(result.rows_affected > 0)
}
