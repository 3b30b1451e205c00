use backend::entities::games::GameStatus;
use backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use backend::repos::games::{self, GameUpdate};
use backend::{with_txn, AppError};

use crate::support::factory::create_room_with_players;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn create_game_starts_at_version_one() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 4).await?;
            let game = games::create_game(txn, room.id, Some(players[0].id)).await?;

            assert_eq!(game.room_id, room.id);
            assert_eq!(game.status, GameStatus::InProgress);
            assert_eq!(game.current_turn, 0);
            assert_eq!(game.current_player_id, Some(players[0].id));
            assert_eq!(game.winner_player_id, None);
            assert_eq!(game.ended_at, None);
            assert_eq!(game.version, 1);
            assert!(!game.is_finished());

            assert_eq!(games::find_by_room(txn, room.id).await?, Some(game.clone()));
            assert_eq!(games::require_game(txn, game.id).await?, game);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn one_game_per_room() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, _) = create_room_with_players(txn, 2, 4).await?;
            games::create_game(txn, room.id, None).await?;

            let err = games::create_game(txn, room.id, None).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::GameAlreadyStarted, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn update_bumps_version_once_for_all_fields() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 4).await?;
            let game = games::create_game(txn, room.id, Some(players[0].id)).await?;

            let dto = GameUpdate::new(game.id, game.version)
                .with_current_turn(3)
                .with_current_player(Some(players[1].id));
            let updated = games::update_game(txn, dto).await?;

            assert_eq!(updated.version, game.version + 1);
            assert_eq!(updated.current_turn, 3);
            assert_eq!(updated.current_player_id, Some(players[1].id));
            assert!(updated.updated_at >= game.updated_at);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn stale_version_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 4).await?;
            let game = games::create_game(txn, room.id, Some(players[0].id)).await?;
            games::advance_turn(txn, &game, players[1].id).await?;

            // `game` still carries version 1
            let err = games::advance_turn(txn, &game, players[0].id)
                .await
                .unwrap_err();
            match err {
                DomainError::Conflict(ConflictKind::OptimisticLock, detail) => {
                    assert!(detail.contains("expected version 1"), "{detail}");
                    assert!(detail.contains("actual version 2"), "{detail}");
                }
                other => panic!("expected optimistic lock, got {other:?}"),
            }

            let current = games::require_game(txn, game.id).await?;
            assert_eq!(current.current_player_id, Some(players[1].id));
            assert_eq!(current.current_turn, 1);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn update_of_missing_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = games::update_game(txn, GameUpdate::new(i64::MAX, 1).with_current_turn(1))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn finish_game_records_winner_and_end() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 4).await?;
            let game = games::create_game(txn, room.id, Some(players[0].id)).await?;

            let finished = games::finish_game(txn, &game, Some(players[1].id)).await?;
            assert!(finished.is_finished());
            assert_eq!(finished.winner_player_id, Some(players[1].id));
            assert_eq!(finished.current_player_id, None);
            assert!(finished.ended_at.is_some());
            assert_eq!(finished.version, 2);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn delete_checks_version_and_tolerates_missing_rows() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, _) = create_room_with_players(txn, 2, 4).await?;
            let game = games::create_game(txn, room.id, None).await?;

            let err = games::delete_game(txn, game.id, game.version + 5)
                .await
                .unwrap_err();
            assert!(err.is_optimistic_lock());
            assert!(games::find_by_id(txn, game.id).await?.is_some());

            games::delete_game(txn, game.id, game.version).await?;
            assert!(games::find_by_id(txn, game.id).await?.is_none());

            // already gone
            games::delete_game(txn, game.id, game.version).await?;
            Ok::<_, AppError>(())
        })
    })
    .await
}
