use backend::entities::trade_offer_properties::TradeDirection;
use backend::entities::trade_offers::TradeStatus;
use backend::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use backend::repos::board;
use backend::repos::trades::{self, TradeProperty, TradeProposal};
use backend::{with_txn, AppError};

use crate::support::factory::{start_game, StartedGame};
use crate::support::test_state::build_test_state;

async fn proposal(
    txn: &sea_orm::DatabaseTransaction,
    started: &StartedGame,
) -> Result<TradeProposal, AppError> {
    let baltic = board::require_space_by_index(txn, 3).await?;
    let reading = board::require_space_by_index(txn, 5).await?;
    Ok(TradeProposal {
        game_id: started.game.id,
        offerer_id: started.players[0].id,
        recipient_id: started.players[1].id,
        cash_from_offerer: 50,
        cash_from_recipient: 0,
        properties: vec![
            TradeProperty {
                board_space_id: baltic.id,
                direction: TradeDirection::OffererToRecipient,
            },
            TradeProperty {
                board_space_id: reading.id,
                direction: TradeDirection::RecipientToOfferer,
            },
        ],
    })
}

#[tokio::test]
async fn create_and_find_with_properties() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 3).await?;
            let trade = trades::create_trade(txn, proposal(txn, &started).await?).await?;

            assert_eq!(trade.status, TradeStatus::Pending);
            assert_eq!(trade.cash_from_offerer, 50);
            assert_eq!(trade.properties.len(), 2);
            assert!(trade.resolved_at.is_none());

            let found = trades::require_trade(txn, trade.id).await?;
            let mut found_props = found.properties.clone();
            let mut created_props = trade.properties.clone();
            found_props.sort_by_key(|p| p.board_space_id);
            created_props.sort_by_key(|p| p.board_space_id);
            assert_eq!(found_props, created_props);

            // both sides see it, a bystander does not
            let game_id = started.game.id;
            for player in &started.players[..2] {
                let pending = trades::list_pending_for_player(txn, game_id, player.id).await?;
                assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![trade.id]);
                assert_eq!(pending[0].properties.len(), 2);
            }
            let bystander = started.players[2].id;
            assert!(trades::list_pending_for_player(txn, game_id, bystander)
                .await?
                .is_empty());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn proposals_are_validated() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;

            let mut to_self = proposal(txn, &started).await?;
            to_self.recipient_id = to_self.offerer_id;
            let err = trades::create_trade(txn, to_self).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ValidationKind::SelfTrade, _)));

            let mut negative = proposal(txn, &started).await?;
            negative.cash_from_recipient = -1;
            let err = trades::create_trade(txn, negative).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ValidationKind::CashAmount, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn trades_resolve_only_from_pending() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let trade = trades::create_trade(txn, proposal(txn, &started).await?).await?;

            let accepted = trades::resolve_trade(txn, trade.id, TradeStatus::Accepted).await?;
            assert_eq!(accepted.status, TradeStatus::Accepted);
            assert!(accepted.resolved_at.is_some());
            assert_eq!(accepted.properties.len(), 2);

            let err = trades::resolve_trade(txn, trade.id, TradeStatus::Rejected)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Conflict(ConflictKind::InvalidTransition, _)
            ));

            assert!(trades::list_pending_for_player(txn, started.game.id, started.players[0].id)
                .await?
                .is_empty());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn resolving_back_to_pending_is_refused() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let started = start_game(txn, 2).await?;
            let trade = trades::create_trade(txn, proposal(txn, &started).await?).await?;

            let err = trades::resolve_trade(txn, trade.id, TradeStatus::Pending)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Conflict(ConflictKind::InvalidTransition, _)
            ));

            let err = trades::resolve_trade(txn, i64::MAX, TradeStatus::Cancelled)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Trade, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}
