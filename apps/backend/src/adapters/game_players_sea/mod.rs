//! SeaORM adapter for per-game player state.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::{not_found, optimistic_lock};
use crate::entities::game_players;

pub mod dto;

pub use dto::{GamePlayerCreate, GamePlayerUpdate};

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GamePlayerCreate,
) -> Result<game_players::Model, DbErr> {
    game_players::ActiveModel {
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        turn_order: Set(dto.turn_order),
        cash: Set(dto.cash),
        position: Set(0),
        in_jail: Set(false),
        jail_turns: Set(0),
        consecutive_doubles: Set(0),
        auto_roll_strikes: Set(0),
        is_bankrupt: Set(false),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        version: Set(1),
    }
    .insert(conn)
    .await
}

pub async fn find_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Option<game_players::Model>, DbErr> {
    game_players::Entity::find_by_id((game_id, player_id))
        .one(conn)
        .await
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<game_players::Model, DbErr> {
    find_player(conn, game_id, player_id)
        .await?
        .ok_or_else(|| not_found("Game player"))
}

/// Players of a game in turn order.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_players::Model>, DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .order_by_asc(game_players::Column::TurnOrder)
        .all(conn)
        .await
}

/// Optimistic partial update; an update with no fields still bumps the version.
pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GamePlayerUpdate,
) -> Result<game_players::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut update = game_players::Entity::update_many();

    if let Some(cash) = dto.cash {
        update = update.col_expr(game_players::Column::Cash, Expr::val(cash).into());
    }
    if let Some(position) = dto.position {
        update = update.col_expr(game_players::Column::Position, Expr::val(position).into());
    }
    if let Some(in_jail) = dto.in_jail {
        update = update.col_expr(game_players::Column::InJail, Expr::val(in_jail).into());
    }
    if let Some(turns) = dto.jail_turns {
        update = update.col_expr(game_players::Column::JailTurns, Expr::val(turns).into());
    }
    if let Some(doubles) = dto.consecutive_doubles {
        update = update.col_expr(
            game_players::Column::ConsecutiveDoubles,
            Expr::val(doubles).into(),
        );
    }
    if let Some(strikes) = dto.auto_roll_strikes {
        update = update.col_expr(
            game_players::Column::AutoRollStrikes,
            Expr::val(strikes).into(),
        );
    }
    if let Some(bankrupt) = dto.is_bankrupt {
        update = update.col_expr(game_players::Column::IsBankrupt, Expr::val(bankrupt).into());
    }

    let result = update
        .col_expr(game_players::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            game_players::Column::Version,
            Expr::col(game_players::Column::Version).add(1),
        )
        .filter(game_players::Column::GameId.eq(dto.game_id))
        .filter(game_players::Column::PlayerId.eq(dto.player_id))
        .filter(game_players::Column::Version.eq(dto.expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_player(conn, dto.game_id, dto.player_id).await? {
            Some(row) => Err(optimistic_lock(
                dto.expected_version as i64,
                row.version as i64,
            )),
            None => Err(not_found("Game player")),
        };
    }

    require_player(conn, dto.game_id, dto.player_id).await
}
