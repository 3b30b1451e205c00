//! Pre-game lobby: sessions, rooms, seating and chat.

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::{debug, info, warn};

use crate::entities::chat_messages;
use crate::entities::room_players::PlayerToken;
use crate::entities::rooms::RoomStatus;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::rooms::{self, Room, Seat};
use crate::repos::sessions::{self, Session};
use crate::repos::chat;
use crate::utils::room_code::{generate_room_code, normalize_room_code};
use crate::utils::session_token::{generate_session_token, hash_session_token};

pub const MAX_DISPLAY_NAME_CHARS: usize = 40;
pub const MAX_CHAT_CHARS: usize = 500;
pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 8;
/// Fresh codes to try before giving up on a room.
pub const ROOM_CODE_ATTEMPTS: usize = 5;

/// A new session and the only copy of its secret token.
#[derive(Debug, Clone)]
pub struct OpenedSession {
    pub session: Session,
    pub token: String,
}

fn validate_display_name(display_name: &str) -> Result<&str, DomainError> {
    let name = display_name.trim();
    let chars = name.chars().count();
    if chars == 0 || chars > MAX_DISPLAY_NAME_CHARS {
        return Err(DomainError::validation(
            ValidationKind::DisplayName,
            format!("Display name must be 1 to {MAX_DISPLAY_NAME_CHARS} characters"),
        ));
    }
    Ok(name)
}

fn validate_max_players(max_players: u8) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&max_players) {
        return Err(DomainError::validation(
            ValidationKind::MaxPlayers,
            format!("Rooms seat between {MIN_PLAYERS} and {MAX_PLAYERS} players"),
        ));
    }
    Ok(())
}

/// Register an anonymous player. Only the token hash is stored.
pub async fn open_session(
    txn: &DatabaseTransaction,
    display_name: &str,
) -> Result<OpenedSession, AppError> {
    let name = validate_display_name(display_name)?;
    let token = generate_session_token()
        .map_err(|e| AppError::internal(format!("session token generation failed: {e}")))?;
    let session = sessions::create_session(txn, name, &hash_session_token(&token)).await?;

    info!(session_id = session.id, "Session opened");
    Ok(OpenedSession { session, token })
}

/// Resolve a presented token to its session and record the visit.
pub async fn authenticate(txn: &DatabaseTransaction, token: &str) -> Result<Session, AppError> {
    let hash = hash_session_token(token);
    let Some(session) = sessions::find_by_token_hash(txn, &hash).await? else {
        return Err(AppError::not_found(
            ErrorCode::SessionNotFound,
            "Unknown session token",
        ));
    };
    Ok(sessions::touch(txn, session.id).await?)
}

/// Open a room and seat its owner in seat 0.
///
/// Each attempt inserts under a savepoint so a code collision does not poison
/// the surrounding transaction.
pub async fn create_room(
    txn: &DatabaseTransaction,
    owner_id: i64,
    max_players: u8,
    owner_token: PlayerToken,
) -> Result<(Room, Seat), AppError> {
    validate_max_players(max_players)?;
    sessions::require_session(txn, owner_id).await?;

    for attempt in 1..=ROOM_CODE_ATTEMPTS {
        let code = generate_room_code();
        let savepoint = txn.begin().await?;
        match rooms::create_room(&savepoint, &code, owner_id, max_players).await {
            Ok(room) => {
                savepoint.commit().await?;
                let seat = rooms::add_seat(txn, room.id, owner_id, 0, owner_token).await?;
                info!(room_id = room.id, owner_id, max_players, "Room created");
                return Ok((room, seat));
            }
            Err(DomainError::Conflict(ConflictKind::RoomCodeTaken, _)) => {
                savepoint.rollback().await?;
                debug!(attempt, "Room code collision, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    warn!(owner_id, attempts = ROOM_CODE_ATTEMPTS, "Room code space exhausted");
    Err(AppError::conflict(
        ErrorCode::RoomCodeTaken,
        "Could not allocate a free room code; please retry",
    ))
}

/// Seat a player in the first free seat of a waiting room.
pub async fn join_room(
    txn: &DatabaseTransaction,
    code: &str,
    player_id: i64,
    token: PlayerToken,
) -> Result<Seat, AppError> {
    let Some(code) = normalize_room_code(code) else {
        return Err(AppError::not_found(ErrorCode::RoomNotFound, "No room with that code"));
    };
    let Some(room) = rooms::find_by_code(txn, &code).await? else {
        return Err(AppError::not_found(ErrorCode::RoomNotFound, "No room with that code"));
    };
    sessions::require_session(txn, player_id).await?;

    if room.status != RoomStatus::Waiting {
        return Err(DomainError::conflict(
            ConflictKind::GameAlreadyStarted,
            "The room is no longer accepting players",
        )
        .into());
    }

    let seats = rooms::list_seats(txn, room.id).await?;
    if seats.iter().any(|s| s.player_id == player_id) {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyMember,
            "Player is already seated in this room",
        )
        .into());
    }
    if seats.len() >= room.max_players as usize {
        return Err(DomainError::validation(ValidationKind::RoomFull, "The room is full").into());
    }
    if seats.iter().any(|s| s.token == token) {
        return Err(DomainError::conflict(
            ConflictKind::TokenTaken,
            "That token is already in use in this room",
        )
        .into());
    }

    let free = (0..room.max_players)
        .find(|n| seats.iter().all(|s| s.seat != *n))
        .ok_or_else(|| DomainError::validation(ValidationKind::RoomFull, "The room is full"))?;

    let seat = rooms::add_seat(txn, room.id, player_id, free, token).await?;
    info!(room_id = room.id, player_id, seat = free, "Player joined room");
    Ok(seat)
}

/// Give up a seat before the game starts; afterwards only mark the player disconnected.
pub async fn leave_room(
    txn: &DatabaseTransaction,
    room_id: i64,
    player_id: i64,
) -> Result<(), AppError> {
    let room = rooms::require_room(txn, room_id).await?;
    if room.status == RoomStatus::Waiting {
        if !rooms::remove_seat(txn, room_id, player_id).await? {
            return Err(AppError::not_found(
                ErrorCode::RoomPlayerNotFound,
                "Player is not seated in this room",
            ));
        }
        info!(room_id, player_id, "Player left room");
    } else {
        rooms::set_connected(txn, room_id, player_id, false).await?;
        debug!(room_id, player_id, "Player disconnected from running room");
    }
    Ok(())
}

/// Post a chat line as a seated player.
pub async fn post_chat(
    txn: &DatabaseTransaction,
    room_id: i64,
    player_id: i64,
    body: &str,
) -> Result<chat_messages::Model, AppError> {
    let body = body.trim();
    let chars = body.chars().count();
    if chars == 0 || chars > MAX_CHAT_CHARS {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("Chat messages must be 1 to {MAX_CHAT_CHARS} characters"),
        ));
    }
    if rooms::find_seat(txn, room_id, player_id).await?.is_none() {
        return Err(AppError::not_found(
            ErrorCode::RoomPlayerNotFound,
            "Only seated players can chat",
        ));
    }
    Ok(chat::post_message(txn, room_id, player_id, body).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_trimmed_and_bounded() {
        assert_eq!(validate_display_name("  Ada  ").unwrap(), "Ada");
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"x".repeat(MAX_DISPLAY_NAME_CHARS)).is_ok());
        assert!(validate_display_name(&"x".repeat(MAX_DISPLAY_NAME_CHARS + 1)).is_err());
        // counted in characters, not bytes
        assert!(validate_display_name(&"é".repeat(MAX_DISPLAY_NAME_CHARS)).is_ok());
    }

    #[test]
    fn room_sizes() {
        assert!(validate_max_players(1).is_err());
        assert!(validate_max_players(2).is_ok());
        assert!(validate_max_players(8).is_ok());
        assert!(matches!(
            validate_max_players(9),
            Err(DomainError::Validation(ValidationKind::MaxPlayers, _))
        ));
    }
}
