use backend::entities::board_space_definitions::SpaceType;
use backend::entities::card_definitions::{CardAction, DeckType};
use backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use backend::repos::board::{self, BoardSpaceCreate, CardCreate};
use backend::{with_txn, AppError};
use serde_json::json;

use crate::support::test_state::build_test_state;

#[tokio::test]
async fn seeded_board_has_forty_spaces_in_order() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let spaces = board::list_spaces(txn).await?;
            assert_eq!(spaces.len(), 40);
            assert!(spaces
                .iter()
                .enumerate()
                .all(|(i, s)| s.space_index as usize == i));
            assert_eq!(spaces[0].space_type, SpaceType::Go);
            assert_eq!(spaces[39].name, "Boardwalk");

            let ownable = board::list_ownable_spaces(txn).await?;
            assert_eq!(ownable.len(), 28);
            assert!(ownable.iter().all(|s| s.price.is_some()));

            let err = board::require_space_by_index(txn, 40).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::BoardSpace, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn seeded_decks_are_sixteen_cards_in_sequence() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            for deck in [DeckType::Chance, DeckType::CommunityChest] {
                let cards = board::list_cards(txn, deck).await?;
                let sequences: Vec<i16> = cards.iter().map(|c| c.sequence).collect();
                assert_eq!(sequences, (0..16).collect::<Vec<i16>>());
                assert!(cards.iter().all(|c| c.deck_type == deck));
            }
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn card_sequence_is_unique_per_deck() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let card = |sequence| CardCreate {
                deck_type: DeckType::Chance,
                sequence,
                text: "Bank error in your favor".to_string(),
                action_code: CardAction::Collect,
                parameters: json!({ "amount": 10 }),
            };

            let extra = board::create_card(txn, card(16)).await?;
            assert_eq!(board::find_card(txn, extra.id).await?, Some(extra.clone()));
            assert!(board::delete_card(txn, extra.id).await?);
            assert!(!board::delete_card(txn, extra.id).await?);

            let err = board::create_card(txn, card(0)).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::CardSequenceTaken, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn board_index_is_unique() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = board::create_space(
                txn,
                BoardSpaceCreate {
                    space_index: 0,
                    name: "Second Go".to_string(),
                    space_type: SpaceType::Go,
                    color_group: None,
                    price: None,
                    house_cost: None,
                    mortgage_value: None,
                    tax_amount: None,
                    rent_table: None,
                },
            )
            .await
            .unwrap_err();
            assert!(
                matches!(err, DomainError::Conflict(ConflictKind::BoardIndexTaken, _)),
                "got {err:?}"
            );
            Ok::<_, AppError>(())
        })
    })
    .await
}
