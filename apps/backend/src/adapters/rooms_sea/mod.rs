//! SeaORM adapter for rooms.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet,
    QueryFilter, Set,
};

use super::{invalid_transition, not_found, restricted_on_delete};
use crate::entities::rooms::{self, RoomStatus};

pub mod dto;

pub use dto::RoomCreate;

pub async fn create_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoomCreate,
) -> Result<rooms::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    rooms::ActiveModel {
        id: NotSet,
        code: Set(dto.code),
        owner_id: Set(dto.owner_id),
        status: Set(RoomStatus::Waiting),
        max_players: Set(dto.max_players),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<rooms::Model>, DbErr> {
    rooms::Entity::find_by_id(id).one(conn).await
}

pub async fn require_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<rooms::Model, DbErr> {
    find_by_id(conn, id).await?.ok_or_else(|| not_found("Room"))
}

/// Codes are stored normalized; callers normalize user input first.
pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<rooms::Model>, DbErr> {
    rooms::Entity::find()
        .filter(rooms::Column::Code.eq(code))
        .one(conn)
        .await
}

/// Move a room from `expected` to `next`, failing if another writer got there first.
pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    expected: RoomStatus,
    next: RoomStatus,
) -> Result<rooms::Model, DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = rooms::Entity::update_many()
        .col_expr(rooms::Column::Status, Expr::val(next.to_value()).into())
        .col_expr(rooms::Column::UpdatedAt, Expr::val(now).into())
        .filter(rooms::Column::Id.eq(id))
        .filter(rooms::Column::Status.eq(expected.to_value()))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_by_id(conn, id).await? {
            Some(room) => Err(invalid_transition(
                &expected.to_value(),
                &room.status.to_value(),
            )),
            None => Err(not_found("Room")),
        };
    }

    require_room(conn, id).await
}

pub async fn delete_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DbErr> {
    let result = rooms::Entity::delete_by_id(id)
        .exec(conn)
        .await
        .map_err(|e| restricted_on_delete(e, "rooms"))?;
    Ok(result.rows_affected > 0)
}
