use backend::config::game::GameConfig;
use backend::entities::card_definitions::DeckType;
use backend::entities::games::GameStatus;
use backend::entities::rooms::RoomStatus;
use backend::repos::{decks, events, players, rooms, spaces};
use backend::services::game_setup::{
    derive_deck_seed, GameSetup, GameSetupService, GAME_STARTED_EVENT,
};
use backend::{with_txn, AppError, ErrorCode};

use crate::support::factory::{create_room_with_players, start_game_with_seed};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn start_game_writes_the_initial_state() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game_with_seed(txn, 3, 42).await?;
            let game = &started.game;

            assert_eq!(game.status, GameStatus::InProgress);
            assert_eq!(game.current_turn, 0);
            assert_eq!(game.current_player_id, Some(started.players[0].id));

            let room = rooms::require_room(txn, started.room.id).await?;
            assert_eq!(room.status, RoomStatus::Started);

            let rows = players::list_by_game(txn, game.id).await?;
            assert_eq!(rows.len(), 3);
            assert!(rows.iter().all(|p| p.cash == GameConfig::default().starting_cash));

            let states = spaces::list_by_game(txn, game.id).await?;
            assert_eq!(states.len(), 28);
            assert!(states.iter().all(|s| !s.is_owned() && s.houses == 0));

            for deck in [DeckType::Chance, DeckType::CommunityChest] {
                let d = decks::require_deck(txn, game.id, deck).await?;
                assert_eq!(d.shuffle_seed, derive_deck_seed(42, deck) as i64);
                assert_eq!(decks::load_order(txn, game.id, deck).await?.len(), 16);
            }

            let log = events::list_since(txn, game.id, 0, 10).await?;
            assert_eq!(log.len(), 1);
            assert_eq!(log[0].event_type, GAME_STARTED_EVENT);
            assert_eq!(log[0].turn_number, 0);
            assert_eq!(log[0].payload["room_id"], started.room.id);
            assert_eq!(log[0].payload["players"].as_array().map(Vec::len), Some(3));
            assert_eq!(log[0].payload["seed"], 42);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn same_seed_gives_the_same_decks() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let a = start_game_with_seed(txn, 2, 7).await?;
            let b = start_game_with_seed(txn, 2, 7).await?;
            let c = start_game_with_seed(txn, 2, 8).await?;

            for deck in [DeckType::Chance, DeckType::CommunityChest] {
                let order_a = decks::load_order(txn, a.game.id, deck).await?;
                let order_b = decks::load_order(txn, b.game.id, deck).await?;
                let order_c = decks::load_order(txn, c.game.id, deck).await?;
                assert_eq!(order_a, order_b, "{deck:?}");
                assert_ne!(order_a, order_c, "{deck:?}");
            }
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn a_room_starts_once() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game_with_seed(txn, 2, 1).await?;

            let setup = GameSetup::new(2, &GameConfig::default());
            let err = GameSetupService::new()
                .start_game(txn, started.room.id, setup)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidTransition);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn a_lone_player_cannot_start() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, _) = create_room_with_players(txn, 1, 4).await?;

            let setup = GameSetup::new(3, &GameConfig::default());
            let err = GameSetupService::new()
                .start_game(txn, room.id, setup)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::NotEnoughPlayers);
            Ok::<_, AppError>(())
        })
    })
    .await
}
