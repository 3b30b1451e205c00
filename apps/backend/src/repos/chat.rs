//! Room chat repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::chat_sea as chat_adapter;
use crate::entities::chat_messages;
use crate::errors::domain::DomainError;

pub async fn post_message(
    txn: &DatabaseTransaction,
    room_id: i64,
    player_id: i64,
    body: &str,
) -> Result<chat_messages::Model, DomainError> {
    Ok(chat_adapter::append(txn, room_id, Some(player_id), body).await?)
}

/// The newest messages, oldest first.
pub async fn list_recent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    limit: u64,
) -> Result<Vec<chat_messages::Model>, DomainError> {
    Ok(chat_adapter::list_recent(conn, room_id, limit).await?)
}
