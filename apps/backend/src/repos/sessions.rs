//! Player session repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::player_sessions_sea as sessions_adapter;
use crate::entities::player_sessions;
use crate::errors::domain::DomainError;

/// An anonymous player identity. The token hash stays in the adapter layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub display_name: String,
    pub created_at: time::OffsetDateTime,
    pub last_seen_at: time::OffsetDateTime,
}

impl From<player_sessions::Model> for Session {
    fn from(model: player_sessions::Model) -> Self {
        Self {
            id: model.id,
            display_name: model.display_name,
            created_at: model.created_at,
            last_seen_at: model.last_seen_at,
        }
    }
}

pub async fn create_session(
    txn: &DatabaseTransaction,
    display_name: &str,
    token_hash: &str,
) -> Result<Session, DomainError> {
    let session = sessions_adapter::create_session(txn, display_name, token_hash).await?;
    Ok(Session::from(session))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Session>, DomainError> {
    let session = sessions_adapter::find_by_id(conn, id).await?;
    Ok(session.map(Session::from))
}

pub async fn require_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Session, DomainError> {
    Ok(Session::from(sessions_adapter::require_session(conn, id).await?))
}

pub async fn find_by_token_hash<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    token_hash: &str,
) -> Result<Option<Session>, DomainError> {
    let session = sessions_adapter::find_by_token_hash(conn, token_hash).await?;
    Ok(session.map(Session::from))
}

pub async fn touch(txn: &DatabaseTransaction, id: i64) -> Result<Session, DomainError> {
    Ok(Session::from(sessions_adapter::touch(txn, id).await?))
}

/// Returns false when the session did not exist.
pub async fn delete_session(txn: &DatabaseTransaction, id: i64) -> Result<bool, DomainError> {
    Ok(sessions_adapter::delete_session(txn, id).await?)
}
