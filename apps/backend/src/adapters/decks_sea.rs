//! SeaORM adapter for per-game card decks.
//!
//! A deck is one `game_deck_states` row holding the draw cursor plus one
//! `game_deck_card_orders` row per card fixing the shuffled order.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::{not_found, optimistic_lock};
use crate::entities::card_definitions::{self, DeckType};
use crate::entities::{game_deck_card_orders, game_deck_states};

/// Persist a deck with the given card order; position `i` holds `card_ids[i]`.
pub async fn create_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
    shuffle_seed: i64,
    card_ids: &[i64],
) -> Result<game_deck_states::Model, DbErr> {
    let state = game_deck_states::ActiveModel {
        game_id: Set(game_id),
        deck_type: Set(deck),
        draw_cursor: Set(0),
        shuffle_seed: Set(shuffle_seed),
        reshuffle_count: Set(0),
        updated_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await?;

    if !card_ids.is_empty() {
        let rows = card_ids
            .iter()
            .enumerate()
            .map(|(position, card_id)| game_deck_card_orders::ActiveModel {
                game_id: Set(game_id),
                deck_type: Set(deck),
                position: Set(position as i16),
                card_id: Set(*card_id),
            });
        game_deck_card_orders::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
    }

    Ok(state)
}

pub async fn find_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
) -> Result<Option<game_deck_states::Model>, DbErr> {
    game_deck_states::Entity::find_by_id((game_id, deck))
        .one(conn)
        .await
}

pub async fn require_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
) -> Result<game_deck_states::Model, DbErr> {
    find_deck(conn, game_id, deck)
        .await?
        .ok_or_else(|| not_found("Deck"))
}

/// Card ids in draw order.
pub async fn load_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
) -> Result<Vec<i64>, DbErr> {
    let rows = game_deck_card_orders::Entity::find()
        .filter(game_deck_card_orders::Column::GameId.eq(game_id))
        .filter(game_deck_card_orders::Column::DeckType.eq(deck))
        .order_by_asc(game_deck_card_orders::Column::Position)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|r| r.card_id).collect())
}

/// Take the card under the cursor and advance it.
///
/// The cursor moves by compare-and-set, so two concurrent draws cannot return
/// the same card. Passing the last card wraps to the top of the same order and
/// counts a reshuffle.
pub async fn draw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
) -> Result<(game_deck_states::Model, card_definitions::Model), DbErr> {
    let state = require_deck(conn, game_id, deck).await?;
    let size = game_deck_card_orders::Entity::find()
        .filter(game_deck_card_orders::Column::GameId.eq(game_id))
        .filter(game_deck_card_orders::Column::DeckType.eq(deck))
        .count(conn)
        .await?;
    if size == 0 {
        return Err(DbErr::RecordNotFound("Deck has no cards".to_string()));
    }

    let cursor = state.draw_cursor;
    let next = cursor as u64 + 1;
    let (next_cursor, wrapped) = if next >= size {
        (0i16, 1)
    } else {
        (next as i16, 0)
    };

    let result = game_deck_states::Entity::update_many()
        .col_expr(game_deck_states::Column::DrawCursor, Expr::val(next_cursor).into())
        .col_expr(
            game_deck_states::Column::ReshuffleCount,
            Expr::col(game_deck_states::Column::ReshuffleCount).add(wrapped),
        )
        .col_expr(
            game_deck_states::Column::UpdatedAt,
            Expr::val(time::OffsetDateTime::now_utc()).into(),
        )
        .filter(game_deck_states::Column::GameId.eq(game_id))
        .filter(game_deck_states::Column::DeckType.eq(deck))
        .filter(game_deck_states::Column::DrawCursor.eq(cursor))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_deck(conn, game_id, deck).await? {
            Some(now) => Err(optimistic_lock(cursor as i64, now.draw_cursor as i64)),
            None => Err(not_found("Deck")),
        };
    }

    let slot = game_deck_card_orders::Entity::find_by_id((game_id, deck, cursor))
        .one(conn)
        .await?
        .ok_or_else(|| not_found("Card"))?;
    let card = card_definitions::Entity::find_by_id(slot.card_id)
        .one(conn)
        .await?
        .ok_or_else(|| not_found("Card"))?;
    let state = require_deck(conn, game_id, deck).await?;

    Ok((state, card))
}
