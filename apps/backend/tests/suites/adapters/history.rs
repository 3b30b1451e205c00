use backend::errors::domain::{DomainError, ValidationKind};
use backend::repos::dice::{self, DiceRollCreate};
use backend::repos::{chat, events};
use backend::services::game_setup::GAME_STARTED_EVENT;
use backend::{with_txn, AppError};
use serde_json::json;

use crate::support::factory::{create_room_with_players, start_game};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn events_page_forward_by_id() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game_id = started.game.id;

            for turn in 1..=5 {
                events::append_event(txn, game_id, turn, "TURN_ENDED", json!({ "turn": turn }))
                    .await?;
            }

            let first_page = events::list_since(txn, game_id, 0, 3).await?;
            assert_eq!(first_page.len(), 3);
            assert_eq!(first_page[0].event_type, GAME_STARTED_EVENT);
            assert!(first_page.windows(2).all(|w| w[0].id < w[1].id));

            let cursor = first_page[2].id;
            let rest = events::list_since(txn, game_id, cursor, 100).await?;
            let turns: Vec<i32> = rest.iter().map(|e| e.turn_number).collect();
            assert_eq!(turns, vec![3, 4, 5]);
            assert_eq!(rest[0].payload, json!({ "turn": 3 }));

            let last = rest[2].id;
            assert!(events::list_since(txn, game_id, last, 100).await?.is_empty());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn dice_rolls_are_kept_per_turn() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let game_id = started.game.id;
            let roll = |player_id, turn_number, die_one, die_two| DiceRollCreate {
                game_id,
                player_id,
                turn_number,
                die_one,
                die_two,
                is_auto_roll: false,
            };

            let a = started.players[0].id;
            let b = started.players[1].id;
            dice::record_roll(txn, roll(a, 1, 3, 3)).await?;
            dice::record_roll(txn, roll(a, 1, 2, 5)).await?;
            dice::record_roll(txn, roll(b, 2, 6, 1)).await?;

            let turn_one = dice::list_for_turn(txn, game_id, 1).await?;
            let faces: Vec<(i16, i16)> = turn_one.iter().map(|r| (r.die_one, r.die_two)).collect();
            assert_eq!(faces, vec![(3, 3), (2, 5)]);
            assert!(turn_one.iter().all(|r| r.player_id == Some(a)));

            assert_eq!(dice::list_by_game(txn, game_id).await?.len(), 3);

            let err = dice::record_roll(txn, roll(b, 2, 7, 1)).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ValidationKind::DiceValue, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn chat_returns_the_newest_oldest_first() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (room, players) = create_room_with_players(txn, 2, 4).await?;
            for i in 0..5 {
                let author = players[i % 2].id;
                chat::post_message(txn, room.id, author, &format!("line {i}")).await?;
            }

            let recent = chat::list_recent(txn, room.id, 3).await?;
            let bodies: Vec<&str> = recent.iter().map(|m| m.body.as_str()).collect();
            assert_eq!(bodies, vec!["line 2", "line 3", "line 4"]);
            assert_eq!(recent[0].player_id, Some(players[0].id));
            Ok::<_, AppError>(())
        })
    })
    .await
}
