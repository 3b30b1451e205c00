//! SeaORM adapter for per-game ownership and development of board spaces.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::{not_found, optimistic_lock};
use crate::entities::game_space_states;
use crate::infra::db_errors::{
    INVALID_SPACE_STATE_PREFIX, SPACE_STATE_DEVELOPMENT, SPACE_STATE_HOUSES,
};

pub mod dto;

pub use dto::SpaceStateUpdate;

pub const MAX_HOUSES: i16 = 4;

/// Reject development combinations no rule set allows.
///
/// A hotel replaces the houses, and a mortgaged space carries no buildings.
fn check_development(houses: i16, has_hotel: bool, is_mortgaged: bool) -> Result<(), DbErr> {
    let problem = if !(0..=MAX_HOUSES).contains(&houses) {
        Some((
            SPACE_STATE_HOUSES,
            format!("houses must be between 0 and {MAX_HOUSES}, got {houses}"),
        ))
    } else if has_hotel && houses != 0 {
        Some((
            SPACE_STATE_DEVELOPMENT,
            "a space with a hotel carries no houses".to_string(),
        ))
    } else if is_mortgaged && (houses != 0 || has_hotel) {
        Some((
            SPACE_STATE_DEVELOPMENT,
            "a mortgaged space cannot carry buildings".to_string(),
        ))
    } else {
        None
    };

    match problem {
        Some((tag, detail)) => Err(DbErr::Custom(format!(
            "{INVALID_SPACE_STATE_PREFIX}{tag}:{detail}"
        ))),
        None => Ok(()),
    }
}

/// An unowned, undeveloped space.
pub async fn create_space_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board_space_id: i64,
) -> Result<game_space_states::Model, DbErr> {
    game_space_states::ActiveModel {
        game_id: Set(game_id),
        board_space_id: Set(board_space_id),
        owner_player_id: Set(None),
        houses: Set(0),
        has_hotel: Set(false),
        is_mortgaged: Set(false),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        version: Set(1),
    }
    .insert(conn)
    .await
}

pub async fn find_space_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board_space_id: i64,
) -> Result<Option<game_space_states::Model>, DbErr> {
    game_space_states::Entity::find_by_id((game_id, board_space_id))
        .one(conn)
        .await
}

pub async fn require_space_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    board_space_id: i64,
) -> Result<game_space_states::Model, DbErr> {
    find_space_state(conn, game_id, board_space_id)
        .await?
        .ok_or_else(|| not_found("Space state"))
}

pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_space_states::Model>, DbErr> {
    game_space_states::Entity::find()
        .filter(game_space_states::Column::GameId.eq(game_id))
        .order_by_asc(game_space_states::Column::BoardSpaceId)
        .all(conn)
        .await
}

pub async fn list_owned_by<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Vec<game_space_states::Model>, DbErr> {
    game_space_states::Entity::find()
        .filter(game_space_states::Column::GameId.eq(game_id))
        .filter(game_space_states::Column::OwnerPlayerId.eq(player_id))
        .order_by_asc(game_space_states::Column::BoardSpaceId)
        .all(conn)
        .await
}

/// Optimistic partial update. The merged row is validated before anything is written.
///
/// A stale version is a lock conflict even when the merged row would also be invalid.
pub async fn update_space_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SpaceStateUpdate,
) -> Result<game_space_states::Model, DbErr> {
    let current = require_space_state(conn, dto.game_id, dto.board_space_id).await?;
    if current.version != dto.expected_version {
        return Err(optimistic_lock(
            dto.expected_version as i64,
            current.version as i64,
        ));
    }
    check_development(
        dto.houses.unwrap_or(current.houses),
        dto.has_hotel.unwrap_or(current.has_hotel),
        dto.is_mortgaged.unwrap_or(current.is_mortgaged),
    )?;

    let now = time::OffsetDateTime::now_utc();
    let mut update = game_space_states::Entity::update_many();
    if let Some(owner) = dto.owner_player_id {
        update = update.col_expr(
            game_space_states::Column::OwnerPlayerId,
            Expr::val(owner).into(),
        );
    }
    if let Some(houses) = dto.houses {
        update = update.col_expr(game_space_states::Column::Houses, Expr::val(houses).into());
    }
    if let Some(hotel) = dto.has_hotel {
        update = update.col_expr(game_space_states::Column::HasHotel, Expr::val(hotel).into());
    }
    if let Some(mortgaged) = dto.is_mortgaged {
        update = update.col_expr(
            game_space_states::Column::IsMortgaged,
            Expr::val(mortgaged).into(),
        );
    }

    let result = update
        .col_expr(game_space_states::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            game_space_states::Column::Version,
            Expr::col(game_space_states::Column::Version).add(1),
        )
        .filter(game_space_states::Column::GameId.eq(dto.game_id))
        .filter(game_space_states::Column::BoardSpaceId.eq(dto.board_space_id))
        .filter(game_space_states::Column::Version.eq(dto.expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_space_state(conn, dto.game_id, dto.board_space_id).await? {
            Some(row) => Err(optimistic_lock(
                dto.expected_version as i64,
                row.version as i64,
            )),
            None => Err(not_found("Space state")),
        };
    }

    require_space_state(conn, dto.game_id, dto.board_space_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_rules() {
        assert!(check_development(0, false, false).is_ok());
        assert!(check_development(4, false, false).is_ok());
        assert!(check_development(0, true, false).is_ok());
        assert!(check_development(0, false, true).is_ok());

        assert!(check_development(5, false, false).is_err());
        assert!(check_development(-1, false, false).is_err());
        assert!(check_development(2, true, false).is_err());
        assert!(check_development(1, false, true).is_err());
        assert!(check_development(0, true, true).is_err());
    }

    #[test]
    fn rejection_carries_the_space_state_prefix() {
        match check_development(9, false, false) {
            Err(DbErr::Custom(msg)) => assert!(msg.starts_with(INVALID_SPACE_STATE_PREFIX)),
            other => panic!("expected custom error, got {other:?}"),
        }
    }
}
