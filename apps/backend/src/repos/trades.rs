//! Trade offer repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::trades_sea as trades_adapter;
use crate::entities::trade_offer_properties::{self, TradeDirection};
use crate::entities::trade_offers::{self, TradeStatus};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeProperty {
    pub board_space_id: i64,
    pub direction: TradeDirection,
}

impl From<trade_offer_properties::Model> for TradeProperty {
    fn from(model: trade_offer_properties::Model) -> Self {
        Self {
            board_space_id: model.board_space_id,
            direction: model.direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    pub id: i64,
    pub game_id: i64,
    pub offerer_id: i64,
    pub recipient_id: i64,
    pub cash_from_offerer: i32,
    pub cash_from_recipient: i32,
    pub status: TradeStatus,
    pub properties: Vec<TradeProperty>,
    pub created_at: time::OffsetDateTime,
    pub resolved_at: Option<time::OffsetDateTime>,
}

impl Trade {
    fn from_parts(
        offer: trade_offers::Model,
        properties: Vec<trade_offer_properties::Model>,
    ) -> Self {
        Self {
            id: offer.id,
            game_id: offer.game_id,
            offerer_id: offer.offerer_id,
            recipient_id: offer.recipient_id,
            cash_from_offerer: offer.cash_from_offerer,
            cash_from_recipient: offer.cash_from_recipient,
            status: offer.status,
            properties: properties.into_iter().map(TradeProperty::from).collect(),
            created_at: offer.created_at,
            resolved_at: offer.resolved_at,
        }
    }
}

/// What a player proposes to another player in the same game.
#[derive(Debug, Clone)]
pub struct TradeProposal {
    pub game_id: i64,
    pub offerer_id: i64,
    pub recipient_id: i64,
    pub cash_from_offerer: i32,
    pub cash_from_recipient: i32,
    pub properties: Vec<TradeProperty>,
}

pub async fn create_trade(
    txn: &DatabaseTransaction,
    proposal: TradeProposal,
) -> Result<Trade, DomainError> {
    if proposal.offerer_id == proposal.recipient_id {
        return Err(DomainError::validation(
            ValidationKind::SelfTrade,
            "A player cannot trade with themselves",
        ));
    }
    if proposal.cash_from_offerer < 0 || proposal.cash_from_recipient < 0 {
        return Err(DomainError::validation(
            ValidationKind::CashAmount,
            "Trade cash must not be negative",
        ));
    }

    let dto = trades_adapter::TradeCreate {
        game_id: proposal.game_id,
        offerer_id: proposal.offerer_id,
        recipient_id: proposal.recipient_id,
        cash_from_offerer: proposal.cash_from_offerer,
        cash_from_recipient: proposal.cash_from_recipient,
        properties: proposal
            .properties
            .iter()
            .map(|p| (p.board_space_id, p.direction))
            .collect(),
    };
    let (offer, properties) = trades_adapter::create_trade(txn, dto).await?;
    Ok(Trade::from_parts(offer, properties))
}

pub async fn find_trade<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Trade>, DomainError> {
    let found = trades_adapter::find_with_properties(conn, id).await?;
    Ok(found.map(|(offer, properties)| Trade::from_parts(offer, properties)))
}

pub async fn require_trade<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Trade, DomainError> {
    find_trade(conn, id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Trade, format!("Trade {id} not found"))
    })
}

/// Offers awaiting an answer that involve the player on either side.
pub async fn list_pending_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Vec<Trade>, DomainError> {
    let offers = trades_adapter::list_pending_for_player(conn, game_id, player_id).await?;
    let mut trades = Vec::with_capacity(offers.len());
    for offer in offers {
        let properties = trades_adapter::list_properties(conn, offer.id).await?;
        trades.push(Trade::from_parts(offer, properties));
    }
    Ok(trades)
}

/// Resolve a pending offer. Accepting only records the answer; moving cash and
/// deeds is up to the caller.
pub async fn resolve_trade(
    txn: &DatabaseTransaction,
    id: i64,
    next: TradeStatus,
) -> Result<Trade, DomainError> {
    let offer = trades_adapter::transition(txn, id, next).await?;
    let properties = trades_adapter::list_properties(txn, id).await?;
    Ok(Trade::from_parts(offer, properties))
}
