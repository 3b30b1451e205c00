//! Per-game deck repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::decks_sea as decks_adapter;
use crate::entities::card_definitions::{self, DeckType};
use crate::entities::game_deck_states;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub game_id: i64,
    pub deck_type: DeckType,
    pub draw_cursor: u16,
    pub shuffle_seed: i64,
    pub reshuffle_count: i32,
}

impl From<game_deck_states::Model> for Deck {
    fn from(model: game_deck_states::Model) -> Self {
        Self {
            game_id: model.game_id,
            deck_type: model.deck_type,
            draw_cursor: model.draw_cursor as u16,
            shuffle_seed: model.shuffle_seed,
            reshuffle_count: model.reshuffle_count,
        }
    }
}

/// The card taken by a draw, and the deck as it stands afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnCard {
    pub deck: Deck,
    pub card: card_definitions::Model,
}

pub async fn create_deck(
    txn: &DatabaseTransaction,
    game_id: i64,
    deck: DeckType,
    shuffle_seed: i64,
    card_ids: &[i64],
) -> Result<Deck, DomainError> {
    let state = decks_adapter::create_deck(txn, game_id, deck, shuffle_seed, card_ids).await?;
    Ok(Deck::from(state))
}

pub async fn find_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
) -> Result<Option<Deck>, DomainError> {
    Ok(decks_adapter::find_deck(conn, game_id, deck).await?.map(Deck::from))
}

pub async fn require_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
) -> Result<Deck, DomainError> {
    Ok(Deck::from(decks_adapter::require_deck(conn, game_id, deck).await?))
}

/// Card ids in draw order.
pub async fn load_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    deck: DeckType,
) -> Result<Vec<i64>, DomainError> {
    Ok(decks_adapter::load_order(conn, game_id, deck).await?)
}

pub async fn draw(
    txn: &DatabaseTransaction,
    game_id: i64,
    deck: DeckType,
) -> Result<DrawnCard, DomainError> {
    let (state, card) = decks_adapter::draw(txn, game_id, deck).await?;
    Ok(DrawnCard {
        deck: Deck::from(state),
        card,
    })
}
