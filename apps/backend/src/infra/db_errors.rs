//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos and services convert here, and
//! higher layers map `DomainError` to `AppError` via `From`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::logging::pii::Redacted;

/// Prefix of the structured payload adapters emit on a stale version.
pub const OPTIMISTIC_LOCK_PREFIX: &str = "OPTIMISTIC_LOCK:";
/// Prefix adapters emit when a status compare-and-set finds another status.
pub const INVALID_TRANSITION_PREFIX: &str = "INVALID_TRANSITION:";
/// Prefix adapters emit when a delete is blocked by a RESTRICT foreign key.
pub const REFERENCE_RESTRICTED_PREFIX: &str = "REFERENCE_RESTRICTED:";
/// Prefix adapters emit for space development values they refuse to write,
/// followed by one of the `SPACE_STATE_*` tags and the detail.
pub const INVALID_SPACE_STATE_PREFIX: &str = "INVALID_SPACE_STATE:";
pub const SPACE_STATE_HOUSES: &str = "HOUSES";
pub const SPACE_STATE_DEVELOPMENT: &str = "DEVELOPMENT";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// True for a foreign-key violation on either backend.
pub fn is_fk_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }
    let msg = e.to_string();
    mentions_sqlstate(&msg, "23503")
        || msg.contains("violates foreign key constraint")
        || msg.contains("FOREIGN KEY constraint failed")
}

/// Extract `table.column[, table.column]` from SQLite "UNIQUE constraint failed: ..." messages.
fn extract_sqlite_columns(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    let rest = &error_msg[start..];
    let line = rest.lines().next().unwrap_or(rest);
    Some(line.trim().trim_end_matches('"'))
}

/// Map SQLite column lists to domain-specific conflicts.
fn map_sqlite_columns_to_conflict(columns: &str) -> Option<(ConflictKind, &'static str)> {
    match columns {
        "rooms.code" => Some((ConflictKind::RoomCodeTaken, "Room code already in use")),
        "board_space_definitions.space_index" => Some((
            ConflictKind::BoardIndexTaken,
            "Board index already defined",
        )),
        "card_definitions.deck_type, card_definitions.sequence" => Some((
            ConflictKind::CardSequenceTaken,
            "Card sequence already defined for this deck",
        )),
        "games.room_id" => Some((
            ConflictKind::GameAlreadyStarted,
            "A game already exists for this room",
        )),
        "room_players.room_id, room_players.seat" => {
            Some((ConflictKind::SeatTaken, "Seat already taken"))
        }
        "room_players.room_id, room_players.token" => {
            Some((ConflictKind::TokenTaken, "Token already taken"))
        }
        "room_players.room_id, room_players.player_id" => Some((
            ConflictKind::AlreadyMember,
            "Player already in this room",
        )),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflicts.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    const TABLE: &[(&str, ConflictKind, &str)] = &[
        ("ux_rooms_code", ConflictKind::RoomCodeTaken, "Room code already in use"),
        (
            "ux_board_space_definitions_index",
            ConflictKind::BoardIndexTaken,
            "Board index already defined",
        ),
        (
            "ux_card_definitions_deck_sequence",
            ConflictKind::CardSequenceTaken,
            "Card sequence already defined for this deck",
        ),
        (
            "ux_games_room_id",
            ConflictKind::GameAlreadyStarted,
            "A game already exists for this room",
        ),
        ("ux_room_players_room_seat", ConflictKind::SeatTaken, "Seat already taken"),
        ("ux_room_players_room_token", ConflictKind::TokenTaken, "Token already taken"),
        ("pk_room_players", ConflictKind::AlreadyMember, "Player already in this room"),
    ];

    TABLE
        .iter()
        .find(|(name, _, _)| error_msg.contains(name))
        .map(|(_, kind, detail)| (kind.clone(), *detail))
}

fn map_check_violation(error_msg: &str) -> (ValidationKind, &'static str) {
    if error_msg.contains("houses") {
        (ValidationKind::Houses, "Houses must be between 0 and 4")
    } else if error_msg.contains("die_one") || error_msg.contains("die_two") {
        (ValidationKind::DiceValue, "Dice values must be between 1 and 6")
    } else if error_msg.contains("cash_from") {
        (ValidationKind::CashAmount, "Trade cash must not be negative")
    } else if error_msg.contains("max_players") {
        (ValidationKind::MaxPlayers, "Rooms seat between 2 and 8 players")
    } else {
        (ValidationKind::CheckViolation, "Check constraint violation")
    }
}

/// Adapters report missing rows as `RecordNotFound("<Entity> not found")`.
fn not_found_kind(msg: &str) -> NotFoundKind {
    const PREFIXES: &[(&str, NotFoundKind)] = &[
        ("Session", NotFoundKind::Session),
        ("Room player", NotFoundKind::RoomPlayer),
        ("Room", NotFoundKind::Room),
        ("Game player", NotFoundKind::GamePlayer),
        ("Game", NotFoundKind::Game),
        ("Space state", NotFoundKind::SpaceState),
        ("Board space", NotFoundKind::BoardSpace),
        ("Card", NotFoundKind::Card),
        ("Deck", NotFoundKind::Deck),
        ("Trade", NotFoundKind::Trade),
    ];
    PREFIXES
        .iter()
        .find(|(prefix, _)| msg.starts_with(prefix))
        .map(|(_, kind)| kind.clone())
        .unwrap_or_else(|| NotFoundKind::Other("Record".into()))
}

#[derive(serde::Deserialize)]
struct Mismatch<T> {
    expected: T,
    actual: T,
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        DbErr::RecordNotFound(msg) => {
            return DomainError::not_found(not_found_kind(msg), msg.clone());
        }
        DbErr::Custom(msg) if msg.starts_with(OPTIMISTIC_LOCK_PREFIX) => {
            let json = &msg[OPTIMISTIC_LOCK_PREFIX.len()..];
            if let Ok(info) = serde_json::from_str::<Mismatch<i64>>(json) {
                warn!(
                    expected = info.expected,
                    actual = info.actual,
                    "Optimistic lock conflict detected"
                );
                return DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Resource was modified concurrently (expected version {}, actual version {}). Please refresh and retry.",
                        info.expected, info.actual
                    ),
                );
            }
            warn!("Optimistic lock conflict detected (version info unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Resource was modified by another transaction; please retry",
            );
        }
        DbErr::Custom(msg) if msg.starts_with(INVALID_TRANSITION_PREFIX) => {
            let json = &msg[INVALID_TRANSITION_PREFIX.len()..];
            if let Ok(info) = serde_json::from_str::<Mismatch<String>>(json) {
                warn!(expected = %info.expected, actual = %info.actual, "Status transition rejected");
                return DomainError::conflict(
                    ConflictKind::InvalidTransition,
                    format!("Expected status {} but found {}", info.expected, info.actual),
                );
            }
            return DomainError::conflict(ConflictKind::InvalidTransition, "Status transition rejected");
        }
        DbErr::Custom(msg) if msg.starts_with(REFERENCE_RESTRICTED_PREFIX) => {
            let table = &msg[REFERENCE_RESTRICTED_PREFIX.len()..];
            warn!(table, "Delete restricted by foreign key");
            return DomainError::conflict(
                ConflictKind::ReferenceRestricted,
                format!("Row in {table} is still referenced and cannot be deleted"),
            );
        }
        DbErr::Custom(msg) if msg.starts_with(INVALID_SPACE_STATE_PREFIX) => {
            let rest = &msg[INVALID_SPACE_STATE_PREFIX.len()..];
            let (tag, detail) = rest.split_once(':').unwrap_or(("", rest));
            let kind = if tag == SPACE_STATE_HOUSES {
                ValidationKind::Houses
            } else {
                ValidationKind::SpaceDevelopment
            };
            return DomainError::validation(kind, detail);
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some(columns) = extract_sqlite_columns(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_columns_to_conflict(columns) {
                return DomainError::conflict(kind, detail);
            }
        }
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(ConflictKind::OtherUnique, "Unique constraint violation");
    }

    if is_fk_violation(&e) {
        warn!(raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        // Postgres names the side that failed; SQLite does not, and deletes
        // are rewrapped by the adapters before they get here.
        if error_msg.contains("update or delete on table") {
            return DomainError::conflict(
                ConflictKind::ReferenceRestricted,
                "Row is still referenced and cannot be deleted",
            );
        }
        return DomainError::validation(
            ValidationKind::MissingReference,
            "Referenced row does not exist",
        );
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed")
        || error_msg.contains("violates check constraint")
    {
        warn!(raw_error = %Redacted(&error_msg), "Check constraint violation");
        let (kind, detail) = map_check_violation(&error_msg);
        return DomainError::validation(kind, detail);
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
