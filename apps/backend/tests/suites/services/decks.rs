use backend::entities::card_definitions::DeckType;
use backend::repos::{decks, events, games};
use backend::services::decks::{draw_card, CARD_DRAWN_EVENT};
use backend::{with_txn, AppError, ErrorCode};

use crate::support::factory::start_game;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn draw_card_logs_against_the_current_turn() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game = games::advance_turn(txn, &started.game, started.players[1].id).await?;
            let order = decks::load_order(txn, game.id, DeckType::CommunityChest).await?;

            let drawn = draw_card(txn, game.id, DeckType::CommunityChest).await?;
            assert_eq!(drawn.card.id, order[0]);
            assert_eq!(drawn.deck.draw_cursor, 1);

            let log = events::list_since(txn, game.id, 0, 10).await?;
            let last = log.last().expect("draw event");
            assert_eq!(last.event_type, CARD_DRAWN_EVENT);
            assert_eq!(last.turn_number, 1);
            assert_eq!(last.payload["card_id"], drawn.card.id);
            assert_eq!(last.payload["player_id"], started.players[1].id);
            assert_eq!(last.payload["deck"], "COMMUNITY_CHEST");
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn drawing_for_an_unknown_game_fails() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = draw_card(txn, i64::MAX, DeckType::Chance).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::GameNotFound);
            Ok::<_, AppError>(())
        })
    })
    .await
}
