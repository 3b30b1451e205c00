use backend::entities::room_players::PlayerToken;
use backend::entities::rooms::RoomStatus;
use backend::errors::domain::{ConflictKind, DomainError, ValidationKind};
use backend::repos::rooms;
use backend::utils::room_code::generate_room_code;
use backend::{with_txn, AppError};

use crate::support::factory::create_session;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn create_room_starts_waiting() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let code = generate_room_code();
            let room = rooms::create_room(txn, &code, owner.id, 4).await?;

            assert_eq!(room.code, code);
            assert_eq!(room.owner_id, owner.id);
            assert_eq!(room.status, RoomStatus::Waiting);
            assert_eq!(room.max_players, 4);

            let found = rooms::find_by_code(txn, &code).await?;
            assert_eq!(found, Some(room.clone()));
            assert_eq!(rooms::require_room(txn, room.id).await?, room);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn room_codes_are_unique() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let code = generate_room_code();
            rooms::create_room(txn, &code, owner.id, 4).await?;

            let err = rooms::create_room(txn, &code, owner.id, 4).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::RoomCodeTaken, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn max_players_is_checked_by_the_schema() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let err = rooms::create_room(txn, &generate_room_code(), owner.id, 9)
                .await
                .unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(ValidationKind::MaxPlayers, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn status_changes_by_compare_and_set() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let room = rooms::create_room(txn, &generate_room_code(), owner.id, 4).await?;

            let started =
                rooms::set_status(txn, room.id, RoomStatus::Waiting, RoomStatus::Started).await?;
            assert_eq!(started.status, RoomStatus::Started);

            // a second starter loses the race
            let err = rooms::set_status(txn, room.id, RoomStatus::Waiting, RoomStatus::Started)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Conflict(ConflictKind::InvalidTransition, _)
            ));

            let err = rooms::set_status(txn, i64::MAX, RoomStatus::Waiting, RoomStatus::Started)
                .await
                .unwrap_err();
            assert!(err.is_not_found());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn seats_list_in_seat_order() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let guest = create_session(txn, "guest").await?;
            let room = rooms::create_room(txn, &generate_room_code(), owner.id, 4).await?;

            rooms::add_seat(txn, room.id, guest.id, 2, PlayerToken::Dog).await?;
            let first = rooms::add_seat(txn, room.id, owner.id, 0, PlayerToken::Car).await?;
            assert!(first.is_connected);
            assert_eq!(first.turn_order, 0);

            let seats = rooms::list_seats(txn, room.id).await?;
            let order: Vec<(i64, u8)> = seats.iter().map(|s| (s.player_id, s.seat)).collect();
            assert_eq!(order, vec![(owner.id, 0), (guest.id, 2)]);

            let seat = rooms::find_seat(txn, room.id, guest.id).await?;
            assert_eq!(seat.map(|s| s.token), Some(PlayerToken::Dog));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn seat_numbers_are_unique_per_room() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let guest = create_session(txn, "guest").await?;
            let room = rooms::create_room(txn, &generate_room_code(), owner.id, 4).await?;
            rooms::add_seat(txn, room.id, owner.id, 0, PlayerToken::Car).await?;

            let err = rooms::add_seat(txn, room.id, guest.id, 0, PlayerToken::Dog)
                .await
                .unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::SeatTaken, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn tokens_are_unique_per_room() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let guest = create_session(txn, "guest").await?;
            let room = rooms::create_room(txn, &generate_room_code(), owner.id, 4).await?;
            rooms::add_seat(txn, room.id, owner.id, 0, PlayerToken::Car).await?;

            let err = rooms::add_seat(txn, room.id, guest.id, 1, PlayerToken::Car)
                .await
                .unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::TokenTaken, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn a_player_sits_once_per_room() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let room = rooms::create_room(txn, &generate_room_code(), owner.id, 4).await?;
            rooms::add_seat(txn, room.id, owner.id, 0, PlayerToken::Car).await?;

            let err = rooms::add_seat(txn, room.id, owner.id, 1, PlayerToken::Dog)
                .await
                .unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::AlreadyMember, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn connection_flag_and_removal() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let room = rooms::create_room(txn, &generate_room_code(), owner.id, 4).await?;
            rooms::add_seat(txn, room.id, owner.id, 0, PlayerToken::Car).await?;

            let seat = rooms::set_connected(txn, room.id, owner.id, false).await?;
            assert!(!seat.is_connected);

            assert!(rooms::remove_seat(txn, room.id, owner.id).await?);
            assert!(!rooms::remove_seat(txn, room.id, owner.id).await?);
            assert!(rooms::list_seats(txn, room.id).await?.is_empty());

            let err = rooms::set_connected(txn, room.id, owner.id, true)
                .await
                .unwrap_err();
            assert!(err.is_not_found());
            Ok::<_, AppError>(())
        })
    })
    .await
}
