//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet,
    QueryFilter, Set,
};

use super::{not_found, optimistic_lock};
use crate::entities::games::{self, GameStatus};

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

/// Apply an update guarded by `version`, then refetch.
///
/// - Adds the version increment and `updated_at` to the caller's columns
/// - Filters by id and the expected version
/// - On zero rows, refetches to tell a missing game from a stale version
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    expected_version: i32,
    configure_update: F,
) -> Result<games::Model, DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(games::Column::Version, Expr::col(games::Column::Version).add(1))
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::Version.eq(expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_by_id(conn, id).await? {
            Some(game) => Err(optimistic_lock(
                expected_version as i64,
                game.version as i64,
            )),
            None => Err(not_found("Game")),
        };
    }

    require_game(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find a game or fail with `RecordNotFound`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| not_found("Game"))
}

pub async fn find_by_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Option<games::Model>, DbErr> {
    games::Entity::find()
        .filter(games::Column::RoomId.eq(room_id))
        .one(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    games::ActiveModel {
        id: NotSet,
        room_id: Set(dto.room_id),
        status: Set(GameStatus::InProgress),
        current_turn: Set(0),
        current_player_id: Set(dto.current_player_id),
        winner_player_id: Set(None),
        started_at: Set(now),
        ended_at: Set(None),
        updated_at: Set(now),
        version: Set(1),
    }
    .insert(conn)
    .await
}

pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, DbErr> {
    optimistic_update_then_fetch(conn, dto.id, dto.expected_version, |mut update| {
        if let Some(status) = dto.status {
            update = update.col_expr(games::Column::Status, Expr::val(status.to_value()).into());
        }
        if let Some(turn) = dto.current_turn {
            update = update.col_expr(games::Column::CurrentTurn, Expr::val(turn).into());
        }
        if let Some(player) = dto.current_player_id {
            update = update.col_expr(games::Column::CurrentPlayerId, Expr::val(player).into());
        }
        if let Some(winner) = dto.winner_player_id {
            update = update.col_expr(games::Column::WinnerPlayerId, Expr::val(winner).into());
        }
        if let Some(ended_at) = dto.ended_at {
            update = update.col_expr(games::Column::EndedAt, Expr::val(ended_at).into());
        }
        update
    })
    .await
}

/// Delete with optimistic locking. Deleting a game that is already gone is a no-op.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    expected_version: i32,
) -> Result<(), DbErr> {
    let result = games::Entity::delete_many()
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::Version.eq(expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        if let Some(game) = find_by_id(conn, id).await? {
            return Err(optimistic_lock(
                expected_version as i64,
                game.version as i64,
            ));
        }
    }
    Ok(())
}
