use backend::entities::card_definitions::DeckType;
use backend::errors::domain::{DomainError, NotFoundKind};
use backend::repos::{board, decks, games};
use backend::{with_txn, AppError};

use crate::support::factory::{create_room_with_players, start_game};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn stored_order_is_a_permutation_of_the_deck() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;

            for deck in [DeckType::Chance, DeckType::CommunityChest] {
                let mut order = decks::load_order(txn, started.game.id, deck).await?;
                assert_eq!(order.len(), 16);

                let mut cards: Vec<i64> =
                    board::list_cards(txn, deck).await?.iter().map(|c| c.id).collect();
                order.sort_unstable();
                cards.sort_unstable();
                assert_eq!(order, cards, "{deck:?}");

                let state = decks::require_deck(txn, started.game.id, deck).await?;
                assert_eq!(state.draw_cursor, 0);
                assert_eq!(state.reshuffle_count, 0);
            }
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn draws_follow_the_stored_order_and_wrap() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game_id = started.game.id;
            let order = decks::load_order(txn, game_id, DeckType::Chance).await?;

            for (i, expected) in order.iter().enumerate() {
                let drawn = decks::draw(txn, game_id, DeckType::Chance).await?;
                assert_eq!(drawn.card.id, *expected, "draw {i}");
                assert_eq!(drawn.card.deck_type, DeckType::Chance);
            }

            let deck = decks::require_deck(txn, game_id, DeckType::Chance).await?;
            assert_eq!(deck.draw_cursor, 0);
            assert_eq!(deck.reshuffle_count, 1);

            // same order again after the wrap
            let again = decks::draw(txn, game_id, DeckType::Chance).await?;
            assert_eq!(again.card.id, order[0]);
            assert_eq!(again.deck.draw_cursor, 1);
            assert_eq!(again.deck.reshuffle_count, 1);
            assert_eq!(decks::load_order(txn, game_id, DeckType::Chance).await?, order);

            // the other deck is untouched
            let other = decks::require_deck(txn, game_id, DeckType::CommunityChest).await?;
            assert_eq!(other.draw_cursor, 0);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn missing_or_empty_decks_are_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, _) = create_room_with_players(txn, 2, 4).await?;
            let game = games::create_game(txn, room.id, None).await?;

            let err = decks::draw(txn, game.id, DeckType::Chance).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Deck, _)));

            decks::create_deck(txn, game.id, DeckType::Chance, 7, &[]).await?;
            let err = decks::draw(txn, game.id, DeckType::Chance).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Deck, _)));

            assert!(decks::find_deck(txn, game.id, DeckType::CommunityChest)
                .await?
                .is_none());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn one_deck_of_each_type_per_game() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let err = decks::create_deck(txn, started.game.id, DeckType::Chance, 1, &[])
                .await
                .unwrap_err();
            assert!(err.is_unique_violation(), "got {err:?}");
            Ok::<_, AppError>(())
        })
    })
    .await
}
