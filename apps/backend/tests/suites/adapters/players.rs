use backend::errors::domain::{DomainError, NotFoundKind};
use backend::repos::players::{self, GamePlayerUpdate};
use backend::{with_txn, AppError};

use crate::support::factory::start_game;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn players_list_in_turn_order() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 3).await?;
            let rows = players::list_by_game(txn, started.game.id).await?;

            let ids: Vec<i64> = rows.iter().map(|p| p.player_id).collect();
            let expected: Vec<i64> = started.players.iter().map(|s| s.id).collect();
            assert_eq!(ids, expected);

            for (i, p) in rows.iter().enumerate() {
                assert_eq!(p.turn_order as usize, i);
                assert_eq!(p.cash, 1500);
                assert_eq!(p.position, 0);
                assert!(!p.in_jail && !p.is_bankrupt);
                assert_eq!(p.version, 1);
            }
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn update_player_is_optimistic() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let player_id = started.players[1].id;
            let before = players::require_player(txn, started.game.id, player_id).await?;

            let dto = GamePlayerUpdate::new(started.game.id, player_id, before.version)
                .with_cash(1300)
                .with_position(10)
                .with_jail(true, 1)
                .with_consecutive_doubles(0);
            let after = players::update_player(txn, dto).await?;
            assert_eq!(after.cash, 1300);
            assert_eq!(after.position, 10);
            assert!(after.in_jail);
            assert_eq!(after.jail_turns, 1);
            assert_eq!(after.version, before.version + 1);

            let stale = GamePlayerUpdate::new(started.game.id, player_id, before.version)
                .with_bankrupt(true);
            let err = players::update_player(txn, stale).await.unwrap_err();
            assert!(err.is_optimistic_lock());

            let unchanged = players::require_player(txn, started.game.id, player_id).await?;
            assert!(!unchanged.is_bankrupt);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;

            assert!(players::find_player(txn, started.game.id, i64::MAX)
                .await?
                .is_none());
            let err = players::require_player(txn, started.game.id, i64::MAX)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::GamePlayer, _)));

            let dto = GamePlayerUpdate::new(started.game.id, i64::MAX, 1).with_cash(1);
            let err = players::update_player(txn, dto).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::GamePlayer, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}
