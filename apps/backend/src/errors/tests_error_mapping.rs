// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::ResponseError;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::Other("VALIDATION_ERROR".into()), "bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);

    let full = DomainError::validation(ValidationKind::RoomFull, "room is full");
    let app: AppError = full.into();
    assert_eq!(app.code().as_str(), "ROOM_FULL");
}

#[test]
fn maps_conflicts() {
    let code = DomainError::conflict(ConflictKind::RoomCodeTaken, "code taken");
    let app: AppError = code.into();
    assert_eq!(app.code().as_str(), "ROOM_CODE_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let restricted = DomainError::conflict(ConflictKind::ReferenceRestricted, "in use");
    let app: AppError = restricted.into();
    assert_eq!(app.code().as_str(), "REFERENCE_RESTRICTED");
    assert_eq!(app.status().as_u16(), 409);

    let stale = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = stale.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");

    let other = DomainError::conflict(ConflictKind::Other("whatever".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let other = DomainError::not_found(NotFoundKind::Other("Record".into()), "gone");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corrupt = DomainError::infra(InfraErrorKind::DataCorruption, "bad row");
    let app: AppError = corrupt.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn problem_details_response_shape() {
    let app = AppError::conflict(ErrorCode::SeatTaken, "seat 3 is taken");
    let resp = app.error_response();
    assert_eq!(resp.status().as_u16(), 409);
    let content_type = resp
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/problem+json"));
}

#[test]
fn unavailable_sets_retry_after() {
    let resp = AppError::db_unavailable("pool closed").error_response();
    assert_eq!(resp.status().as_u16(), 503);
    assert!(resp.headers().get("retry-after").is_some());
}
