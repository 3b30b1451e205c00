//! Card draws during play.

use sea_orm::{ActiveEnum, DatabaseTransaction};
use serde_json::json;
use tracing::debug;

use crate::entities::card_definitions::DeckType;
use crate::error::AppError;
use crate::repos::decks::{self, DrawnCard};
use crate::repos::{events, games};

pub const CARD_DRAWN_EVENT: &str = "CARD_DRAWN";

/// Draw the next card of a game's deck and log it against the current turn.
pub async fn draw_card(
    txn: &DatabaseTransaction,
    game_id: i64,
    deck: DeckType,
) -> Result<DrawnCard, AppError> {
    let game = games::require_game(txn, game_id).await?;
    let drawn = decks::draw(txn, game_id, deck).await?;

    events::append_event(
        txn,
        game_id,
        game.current_turn,
        CARD_DRAWN_EVENT,
        json!({
            "deck": deck.to_value(),
            "card_id": drawn.card.id,
            "player_id": game.current_player_id,
            "reshuffle_count": drawn.deck.reshuffle_count,
        }),
    )
    .await?;

    debug!(game_id, ?deck, card_id = drawn.card.id, "Card drawn");
    Ok(drawn)
}
