//! Error codes for the Monopoly backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem-details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    ValidationError,
    BadRequest,
    InvalidDisplayName,
    InvalidMaxPlayers,
    RoomFull,
    InvalidHouses,
    InvalidSpaceDevelopment,
    InvalidDiceValue,
    InvalidCashAmount,
    SelfTrade,
    NotEnoughPlayers,
    MissingReference,
    CheckViolation,

    // Resource Not Found
    SessionNotFound,
    RoomNotFound,
    RoomPlayerNotFound,
    GameNotFound,
    GamePlayerNotFound,
    SpaceStateNotFound,
    BoardSpaceNotFound,
    CardNotFound,
    DeckNotFound,
    TradeNotFound,
    NotFound,

    // Conflicts
    RoomCodeTaken,
    BoardIndexTaken,
    CardSequenceTaken,
    GameAlreadyStarted,
    SeatTaken,
    TokenTaken,
    AlreadyMember,
    UniqueViolation,
    ReferenceRestricted,
    OptimisticLock,
    InvalidTransition,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidDisplayName => "INVALID_DISPLAY_NAME",
            Self::InvalidMaxPlayers => "INVALID_MAX_PLAYERS",
            Self::RoomFull => "ROOM_FULL",
            Self::InvalidHouses => "INVALID_HOUSES",
            Self::InvalidSpaceDevelopment => "INVALID_SPACE_DEVELOPMENT",
            Self::InvalidDiceValue => "INVALID_DICE_VALUE",
            Self::InvalidCashAmount => "INVALID_CASH_AMOUNT",
            Self::SelfTrade => "SELF_TRADE",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::MissingReference => "MISSING_REFERENCE",
            Self::CheckViolation => "CHECK_VIOLATION",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::RoomPlayerNotFound => "ROOM_PLAYER_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::GamePlayerNotFound => "GAME_PLAYER_NOT_FOUND",
            Self::SpaceStateNotFound => "SPACE_STATE_NOT_FOUND",
            Self::BoardSpaceNotFound => "BOARD_SPACE_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::DeckNotFound => "DECK_NOT_FOUND",
            Self::TradeNotFound => "TRADE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::RoomCodeTaken => "ROOM_CODE_TAKEN",
            Self::BoardIndexTaken => "BOARD_INDEX_TAKEN",
            Self::CardSequenceTaken => "CARD_SEQUENCE_TAKEN",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::SeatTaken => "SEAT_TAKEN",
            Self::TokenTaken => "TOKEN_TAKEN",
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::ReferenceRestricted => "REFERENCE_RESTRICTED",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
