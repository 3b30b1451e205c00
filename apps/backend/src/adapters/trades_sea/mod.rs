//! SeaORM adapter for trade offers and the properties they move.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Set,
};

use super::{invalid_transition, not_found};
use crate::entities::trade_offers::{self, TradeStatus};
use crate::entities::trade_offer_properties;

pub mod dto;

pub use dto::TradeCreate;

pub async fn create_trade<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TradeCreate,
) -> Result<(trade_offers::Model, Vec<trade_offer_properties::Model>), DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let offer = trade_offers::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        offerer_id: Set(dto.offerer_id),
        recipient_id: Set(dto.recipient_id),
        cash_from_offerer: Set(dto.cash_from_offerer),
        cash_from_recipient: Set(dto.cash_from_recipient),
        status: Set(TradeStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
        resolved_at: Set(None),
    }
    .insert(conn)
    .await?;

    let properties: Vec<trade_offer_properties::Model> = dto
        .properties
        .into_iter()
        .map(|(board_space_id, direction)| trade_offer_properties::Model {
            trade_offer_id: offer.id,
            board_space_id,
            direction,
        })
        .collect();

    if !properties.is_empty() {
        let rows = properties
            .iter()
            .cloned()
            .map(trade_offer_properties::ActiveModel::from);
        trade_offer_properties::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
    }

    Ok((offer, properties))
}

pub async fn find_trade<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<trade_offers::Model>, DbErr> {
    trade_offers::Entity::find_by_id(id).one(conn).await
}

pub async fn list_properties<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    trade_id: i64,
) -> Result<Vec<trade_offer_properties::Model>, DbErr> {
    trade_offer_properties::Entity::find()
        .filter(trade_offer_properties::Column::TradeOfferId.eq(trade_id))
        .order_by_asc(trade_offer_properties::Column::BoardSpaceId)
        .all(conn)
        .await
}

pub async fn find_with_properties<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<(trade_offers::Model, Vec<trade_offer_properties::Model>)>, DbErr> {
    let Some(offer) = find_trade(conn, id).await? else {
        return Ok(None);
    };
    let properties = list_properties(conn, id).await?;
    Ok(Some((offer, properties)))
}

/// Pending offers in a game where the player is on either side, oldest first.
pub async fn list_pending_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Vec<trade_offers::Model>, DbErr> {
    trade_offers::Entity::find()
        .filter(trade_offers::Column::GameId.eq(game_id))
        .filter(trade_offers::Column::Status.eq(TradeStatus::Pending))
        .filter(
            Condition::any()
                .add(trade_offers::Column::OffererId.eq(player_id))
                .add(trade_offers::Column::RecipientId.eq(player_id)),
        )
        .order_by_asc(trade_offers::Column::Id)
        .all(conn)
        .await
}

/// Resolve a pending offer. Only PENDING offers move, and only to a terminal status.
pub async fn transition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    next: TradeStatus,
) -> Result<trade_offers::Model, DbErr> {
    let pending = TradeStatus::Pending.to_value();
    if !next.is_terminal() {
        return Err(invalid_transition("a terminal status", &next.to_value()));
    }

    let now = time::OffsetDateTime::now_utc();
    let result = trade_offers::Entity::update_many()
        .col_expr(trade_offers::Column::Status, Expr::val(next.to_value()).into())
        .col_expr(trade_offers::Column::ResolvedAt, Expr::val(Some(now)).into())
        .col_expr(trade_offers::Column::UpdatedAt, Expr::val(now).into())
        .filter(trade_offers::Column::Id.eq(id))
        .filter(trade_offers::Column::Status.eq(pending.clone()))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_trade(conn, id).await? {
            Some(offer) => Err(invalid_transition(&pending, &offer.status.to_value())),
            None => Err(not_found("Trade")),
        };
    }

    find_trade(conn, id).await?.ok_or_else(|| not_found("Trade"))
}
