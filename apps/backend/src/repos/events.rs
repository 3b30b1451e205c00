//! Game event log.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::event_log_sea as events_adapter;
use crate::entities::game_event_logs;
use crate::errors::domain::DomainError;

pub async fn append_event(
    txn: &DatabaseTransaction,
    game_id: i64,
    turn_number: i32,
    event_type: &str,
    payload: serde_json::Value,
) -> Result<game_event_logs::Model, DomainError> {
    Ok(events_adapter::append(txn, game_id, turn_number, event_type, payload).await?)
}

/// Page through events after the `after_id` cursor.
pub async fn list_since<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    after_id: i64,
    limit: u64,
) -> Result<Vec<game_event_logs::Model>, DomainError> {
    Ok(events_adapter::list_since(conn, game_id, after_id, limit).await?)
}
