use backend::errors::domain::{DomainError, NotFoundKind};
use backend::repos::sessions;
use backend::{with_txn, AppError};
use backend_test_support::unique_helpers::unique_display_name;

use crate::support::test_state::build_test_state;

#[tokio::test]
async fn create_and_find_by_token_hash() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let name = unique_display_name("ada");
            let hash = blake3::hash(name.as_bytes()).to_hex().to_string();
            let session = sessions::create_session(txn, &name, &hash).await?;

            assert!(session.id > 0);
            assert_eq!(session.display_name, name);

            let by_hash = sessions::find_by_token_hash(txn, &hash).await?;
            assert_eq!(by_hash.as_ref().map(|s| s.id), Some(session.id));

            let by_id = sessions::find_by_id(txn, session.id).await?;
            assert_eq!(by_id, Some(session));

            assert!(sessions::find_by_token_hash(txn, "no-such-hash")
                .await?
                .is_none());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn touch_moves_last_seen_forward() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let name = unique_display_name("touch");
            let session = sessions::create_session(txn, &name, &name).await?;

            let touched = sessions::touch(txn, session.id).await?;
            assert_eq!(touched.id, session.id);
            assert!(touched.last_seen_at >= session.last_seen_at);
            assert_eq!(touched.created_at, session.created_at);
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn missing_session_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = sessions::require_session(txn, i64::MAX).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Session, _)));

            let err = sessions::touch(txn, i64::MAX).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(NotFoundKind::Session, _)));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn delete_reports_whether_a_row_went() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let name = unique_display_name("gone");
            let session = sessions::create_session(txn, &name, &name).await?;

            assert!(sessions::delete_session(txn, session.id).await?);
            assert!(!sessions::delete_session(txn, session.id).await?);
            assert!(sessions::find_by_id(txn, session.id).await?.is_none());
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn token_hash_is_unique() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let hash = unique_display_name("hash");
            sessions::create_session(txn, &unique_display_name("first"), &hash).await?;

            let err = sessions::create_session(txn, &unique_display_name("second"), &hash)
                .await
                .unwrap_err();
            assert!(err.is_unique_violation(), "got {err:?}");
            Ok::<_, AppError>(())
        })
    })
    .await
}
