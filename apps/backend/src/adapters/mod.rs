//! SeaORM adapters, one module per aggregate.
//!
//! Adapter functions return `DbErr`; repos map to `DomainError` via `From<DbErr>`.
//! Conditions the database cannot express on its own are reported as
//! `DbErr::Custom` payloads whose prefixes `infra::db_errors` understands.

use sea_orm::DbErr;

use crate::infra::db_errors::{
    is_fk_violation, INVALID_TRANSITION_PREFIX, OPTIMISTIC_LOCK_PREFIX,
    REFERENCE_RESTRICTED_PREFIX,
};

pub mod board_sea;
pub mod chat_sea;
pub mod decks_sea;
pub mod dice_rolls_sea;
pub mod event_log_sea;
pub mod game_players_sea;
pub mod games_sea;
pub mod player_sessions_sea;
pub mod room_players_sea;
pub mod rooms_sea;
pub mod space_states_sea;
pub mod trades_sea;

pub(crate) fn not_found(what: &str) -> DbErr {
    DbErr::RecordNotFound(format!("{what} not found"))
}

pub(crate) fn optimistic_lock(expected: i64, actual: i64) -> DbErr {
    DbErr::Custom(format!(
        "{OPTIMISTIC_LOCK_PREFIX}{{\"expected\":{expected},\"actual\":{actual}}}"
    ))
}

pub(crate) fn invalid_transition(expected: &str, actual: &str) -> DbErr {
    let payload = serde_json::json!({ "expected": expected, "actual": actual });
    DbErr::Custom(format!("{INVALID_TRANSITION_PREFIX}{payload}"))
}

/// A foreign-key failure on DELETE can only mean a RESTRICT reference.
///
/// SQLite reports both directions as "FOREIGN KEY constraint failed", so the
/// delete adapters tag the error before it reaches the generic mapper.
pub(crate) fn restricted_on_delete(e: DbErr, table: &str) -> DbErr {
    if is_fk_violation(&e) {
        DbErr::Custom(format!("{REFERENCE_RESTRICTED_PREFIX}{table}"))
    } else {
        e
    }
}
