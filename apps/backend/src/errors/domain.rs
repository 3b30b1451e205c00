//! Domain-level error type used across repos and services.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Input or business-rule violations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    DisplayName,
    MaxPlayers,
    RoomFull,
    Houses,
    /// Hotel alongside houses, or buildings on a mortgaged space.
    SpaceDevelopment,
    DiceValue,
    CashAmount,
    SelfTrade,
    NotEnoughPlayers,
    /// Insert or update pointed at a row that does not exist.
    MissingReference,
    /// A CHECK constraint rejected the row.
    CheckViolation,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Room,
    RoomPlayer,
    Game,
    GamePlayer,
    SpaceState,
    BoardSpace,
    Card,
    Deck,
    Trade,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    RoomCodeTaken,
    BoardIndexTaken,
    CardSequenceTaken,
    /// A game already exists for the room.
    GameAlreadyStarted,
    SeatTaken,
    TokenTaken,
    AlreadyMember,
    /// Unique violation on a constraint without a dedicated kind.
    OtherUnique,
    /// Delete blocked by a RESTRICT foreign key.
    ReferenceRestricted,
    OptimisticLock,
    /// Status compare-and-set found a different status than expected.
    InvalidTransition,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    /// Any uniqueness conflict, named or not.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            DomainError::Conflict(
                ConflictKind::RoomCodeTaken
                    | ConflictKind::BoardIndexTaken
                    | ConflictKind::CardSequenceTaken
                    | ConflictKind::GameAlreadyStarted
                    | ConflictKind::SeatTaken
                    | ConflictKind::TokenTaken
                    | ConflictKind::AlreadyMember
                    | ConflictKind::OtherUnique,
                _
            )
        )
    }

    pub fn is_restricted(&self) -> bool {
        matches!(
            self,
            DomainError::Conflict(ConflictKind::ReferenceRestricted, _)
        )
    }

    pub fn is_optimistic_lock(&self) -> bool {
        matches!(self, DomainError::Conflict(ConflictKind::OptimisticLock, _))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(..))
    }
}
