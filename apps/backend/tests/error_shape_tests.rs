//! Problem-details rendering of errors raised by real operations.
//!
//!   cargo test --test error_shape_tests

mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use backend::entities::room_players::PlayerToken;
use backend::repos::games::{self, GameUpdate};
use backend::services::lobby;
use backend::{with_txn, AppError};
use backend_test_support::problem_details::assert_problem_details_from_http_response;

use crate::support::factory::{create_room_with_players, create_session};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn unknown_room_code_renders_404() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let player = create_session(txn, "lost").await?;
            lobby::join_room(txn, "ZZZZZZ", player.id, PlayerToken::Car).await?;
            Ok(())
        })
    })
    .await
    .unwrap_err();

    assert_problem_details_from_http_response(
        err.error_response(),
        "ROOM_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    Ok(())
}

#[tokio::test]
async fn stale_version_renders_409_with_versions() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, _) = create_room_with_players(txn, 2, 4).await?;
            let game = games::create_game(txn, room.id, None).await?;
            games::update_game(txn, GameUpdate::new(game.id, 1).with_current_turn(1)).await?;
            games::update_game(txn, GameUpdate::new(game.id, 1).with_current_turn(2)).await?;
            Ok(())
        })
    })
    .await
    .unwrap_err();

    let problem = assert_problem_details_from_http_response(
        err.error_response(),
        "OPTIMISTIC_LOCK",
        StatusCode::CONFLICT,
        Some("expected version 1, actual version 2"),
    )
    .await;
    assert_eq!(problem.title, "Optimistic Lock");
    Ok(())
}

#[tokio::test]
async fn full_room_renders_validation_error() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, _) = create_room_with_players(txn, 2, 2).await?;
            let late = create_session(txn, "late").await?;
            lobby::join_room(txn, &room.code, late.id, PlayerToken::Boot).await?;
            Ok(())
        })
    })
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_problem_details_from_http_response(
        err.error_response(),
        "ROOM_FULL",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("full"),
    )
    .await;
    Ok(())
}
