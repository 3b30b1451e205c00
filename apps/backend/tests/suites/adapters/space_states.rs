use backend::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use backend::repos::board;
use backend::repos::spaces::{self, SpaceStateUpdate};
use backend::{with_txn, AppError};

use crate::support::factory::start_game;
use crate::support::test_state::build_test_state;

// Mediterranean Avenue and Baltic Avenue
const FIRST_STREET: u8 = 1;
const SECOND_STREET: u8 = 3;

#[tokio::test]
async fn ownership_round_trip() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game_id = started.game.id;
            let owner = started.players[0].id;
            let first = board::require_space_by_index(txn, FIRST_STREET).await?;
            let second = board::require_space_by_index(txn, SECOND_STREET).await?;

            let fresh = spaces::require_space_state(txn, game_id, first.id).await?;
            assert!(!fresh.is_owned());
            assert_eq!(fresh.version, 1);

            let bought = spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, first.id, fresh.version).with_owner(Some(owner)),
            )
            .await?;
            assert_eq!(bought.owner_player_id, Some(owner));
            assert_eq!(bought.version, 2);

            let s2 = spaces::require_space_state(txn, game_id, second.id).await?;
            spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, second.id, s2.version).with_owner(Some(owner)),
            )
            .await?;

            let owned = spaces::list_owned_by(txn, game_id, owner).await?;
            let mut ids: Vec<i64> = owned.iter().map(|s| s.board_space_id).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![first.id, second.id]);

            let returned = spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, first.id, bought.version).with_owner(None),
            )
            .await?;
            assert!(!returned.is_owned());
            assert_eq!(spaces::list_owned_by(txn, game_id, owner).await?.len(), 1);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn development_rules_are_enforced() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game_id = started.game.id;
            let space = board::require_space_by_index(txn, FIRST_STREET).await?;
            let current = spaces::require_space_state(txn, game_id, space.id).await?;

            let too_many = SpaceStateUpdate::new(game_id, space.id, current.version).with_houses(5);
            let err = spaces::update_space_state(txn, too_many).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ValidationKind::Houses, _)));

            let four = spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, space.id, current.version).with_houses(4),
            )
            .await?;
            assert_eq!(four.houses, 4);

            // a hotel replaces the houses; keeping them is refused
            let both = SpaceStateUpdate::new(game_id, space.id, four.version).with_hotel(true);
            let err = spaces::update_space_state(txn, both).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::SpaceDevelopment, _)
            ));

            let mortgaged =
                SpaceStateUpdate::new(game_id, space.id, four.version).with_mortgaged(true);
            let err = spaces::update_space_state(txn, mortgaged).await.unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::SpaceDevelopment, _)
            ));

            let hotel = spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, space.id, four.version)
                    .with_houses(0)
                    .with_hotel(true),
            )
            .await?;
            assert!(hotel.has_hotel);
            assert_eq!(hotel.houses, 0);
            // refused updates did not move the version
            assert_eq!(hotel.version, four.version + 1);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn stale_space_update_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game_id = started.game.id;
            let space = board::require_space_by_index(txn, FIRST_STREET).await?;
            let current = spaces::require_space_state(txn, game_id, space.id).await?;

            spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, space.id, current.version).with_mortgaged(true),
            )
            .await?;

            let err = spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, space.id, current.version).with_mortgaged(false),
            )
            .await
            .unwrap_err();
            assert!(err.is_optimistic_lock());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn stale_writer_gets_a_lock_conflict_not_a_rule_error() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game_id = started.game.id;
            let space = board::require_space_by_index(txn, FIRST_STREET).await?;
            let read = spaces::require_space_state(txn, game_id, space.id).await?;

            // first writer builds
            let built = spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, space.id, read.version).with_houses(3),
            )
            .await?;

            // second writer mortgages from the same read; fine against what it saw
            let err = spaces::update_space_state(
                txn,
                SpaceStateUpdate::new(game_id, space.id, read.version).with_mortgaged(true),
            )
            .await
            .unwrap_err();
            assert!(err.is_optimistic_lock(), "got {err:?}");

            let after = spaces::require_space_state(txn, game_id, space.id).await?;
            assert_eq!(after.version, built.version);
            assert_eq!(after.houses, 3);
            assert!(!after.is_mortgaged);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn non_ownable_spaces_have_no_state() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let go = board::require_space_by_index(txn, 0).await?;

            assert!(spaces::find_space_state(txn, started.game.id, go.id)
                .await?
                .is_none());
            let err = spaces::require_space_state(txn, started.game.id, go.id)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::SpaceState, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}
