use backend::entities::room_players::PlayerToken;
use backend::entities::rooms::RoomStatus;
use backend::repos::{chat, rooms};
use backend::services::lobby;
use backend::{with_txn, AppError, ErrorCode};

use crate::support::factory::{create_room_with_players, create_session, TOKENS};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn session_token_authenticates() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let opened = lobby::open_session(txn, "  Ada  ").await?;
            assert_eq!(opened.session.display_name, "Ada");
            assert!(!opened.token.is_empty());

            let session = lobby::authenticate(txn, &opened.token).await?;
            assert_eq!(session.id, opened.session.id);
            assert!(session.last_seen_at >= opened.session.last_seen_at);

            let err = lobby::authenticate(txn, "not-a-token").await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::SessionNotFound);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn display_name_must_not_be_blank() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = lobby::open_session(txn, "   ").await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidDisplayName);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn owner_takes_seat_zero() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_session(txn, "owner").await?;
            let (room, seat) = lobby::create_room(txn, owner.id, 4, PlayerToken::Hat).await?;

            assert_eq!(room.status, RoomStatus::Waiting);
            assert_eq!(room.code.len(), 6);
            assert_eq!(seat.seat, 0);
            assert_eq!(seat.player_id, owner.id);
            assert_eq!(seat.token, PlayerToken::Hat);

            let err = lobby::create_room(txn, owner.id, 1, PlayerToken::Hat)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidMaxPlayers);

            let err = lobby::create_room(txn, i64::MAX, 4, PlayerToken::Hat)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::SessionNotFound);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn join_fills_the_first_free_seat() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 3, 4).await?;
            let seats = rooms::list_seats(txn, room.id).await?;
            assert_eq!(seats.iter().map(|s| s.seat).collect::<Vec<_>>(), vec![0, 1, 2]);

            // free seat 1, the next player gets it back
            lobby::leave_room(txn, room.id, players[1].id).await?;
            let late = create_session(txn, "late").await?;
            let lowercase = room.code.to_ascii_lowercase();
            let seat = lobby::join_room(txn, &lowercase, late.id, PlayerToken::Iron).await?;
            assert_eq!(seat.seat, 1);
            assert_eq!(seat.turn_order, 1);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn join_is_refused_with_the_right_code() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 2).await?;
            let outsider = create_session(txn, "outsider").await?;

            let err = lobby::join_room(txn, "??", outsider.id, PlayerToken::Iron)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::RoomNotFound);

            let err = lobby::join_room(txn, &room.code, players[1].id, PlayerToken::Iron)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::AlreadyMember);

            let err = lobby::join_room(txn, &room.code, outsider.id, PlayerToken::Iron)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::RoomFull);

            lobby::leave_room(txn, room.id, players[1].id).await?;
            let err = lobby::join_room(txn, &room.code, outsider.id, TOKENS[0])
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::TokenTaken);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn started_rooms_keep_their_seats() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 4).await?;
            rooms::set_status(txn, room.id, RoomStatus::Waiting, RoomStatus::Started).await?;

            let outsider = create_session(txn, "outsider").await?;
            let err = lobby::join_room(txn, &room.code, outsider.id, PlayerToken::Iron)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::GameAlreadyStarted);

            lobby::leave_room(txn, room.id, players[1].id).await?;
            let seat = rooms::find_seat(txn, room.id, players[1].id).await?;
            assert_eq!(seat.map(|s| s.is_connected), Some(false));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn only_seated_players_chat() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 4).await?;

            let msg = lobby::post_chat(txn, room.id, players[0].id, "  hello  ").await?;
            assert_eq!(msg.body, "hello");

            let err = lobby::post_chat(txn, room.id, players[0].id, " ").await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);

            let long = "x".repeat(lobby::MAX_CHAT_CHARS + 1);
            let err = lobby::post_chat(txn, room.id, players[0].id, &long)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);

            let outsider = create_session(txn, "outsider").await?;
            let err = lobby::post_chat(txn, room.id, outsider.id, "hi").await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::RoomPlayerNotFound);

            assert_eq!(chat::list_recent(txn, room.id, 10).await?.len(), 1);
            Ok::<_, AppError>(())
        })
    })
    .await
}
