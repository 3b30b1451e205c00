//! Room and seating repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::room_players_sea as seats_adapter;
use crate::adapters::rooms_sea as rooms_adapter;
use crate::entities::room_players::{self, PlayerToken};
use crate::entities::rooms::{self, RoomStatus};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub code: String,
    pub owner_id: i64,
    pub status: RoomStatus,
    pub max_players: u8,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<rooms::Model> for Room {
    fn from(model: rooms::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            owner_id: model.owner_id,
            status: model.status,
            max_players: model.max_players as u8,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// A player seated in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub room_id: i64,
    pub player_id: i64,
    pub seat: u8,
    pub turn_order: u8,
    pub token: PlayerToken,
    pub is_connected: bool,
    pub joined_at: time::OffsetDateTime,
}

impl From<room_players::Model> for Seat {
    fn from(model: room_players::Model) -> Self {
        Self {
            room_id: model.room_id,
            player_id: model.player_id,
            seat: model.seat as u8,
            turn_order: model.turn_order as u8,
            token: model.token,
            is_connected: model.is_connected,
            joined_at: model.joined_at,
        }
    }
}

pub async fn create_room(
    txn: &DatabaseTransaction,
    code: &str,
    owner_id: i64,
    max_players: u8,
) -> Result<Room, DomainError> {
    let dto = rooms_adapter::RoomCreate::new(code, owner_id, max_players as i16);
    Ok(Room::from(rooms_adapter::create_room(txn, dto).await?))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Room>, DomainError> {
    Ok(rooms_adapter::find_by_id(conn, id).await?.map(Room::from))
}

pub async fn require_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Room, DomainError> {
    Ok(Room::from(rooms_adapter::require_room(conn, id).await?))
}

pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<Room>, DomainError> {
    Ok(rooms_adapter::find_by_code(conn, code).await?.map(Room::from))
}

/// Compare-and-set on the room status.
pub async fn set_status(
    txn: &DatabaseTransaction,
    id: i64,
    expected: RoomStatus,
    next: RoomStatus,
) -> Result<Room, DomainError> {
    Ok(Room::from(rooms_adapter::set_status(txn, id, expected, next).await?))
}

pub async fn delete_room(txn: &DatabaseTransaction, id: i64) -> Result<bool, DomainError> {
    Ok(rooms_adapter::delete_room(txn, id).await?)
}

pub async fn add_seat(
    txn: &DatabaseTransaction,
    room_id: i64,
    player_id: i64,
    seat: u8,
    token: PlayerToken,
) -> Result<Seat, DomainError> {
    let dto = seats_adapter::RoomPlayerCreate {
        room_id,
        player_id,
        seat: seat as i16,
        turn_order: seat as i16,
        token,
    };
    Ok(Seat::from(seats_adapter::add_player(txn, dto).await?))
}

pub async fn find_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    player_id: i64,
) -> Result<Option<Seat>, DomainError> {
    let seat = seats_adapter::find_member(conn, room_id, player_id).await?;
    Ok(seat.map(Seat::from))
}

/// Seats in seat order.
pub async fn list_seats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<Seat>, DomainError> {
    let seats = seats_adapter::list_by_room(conn, room_id).await?;
    Ok(seats.into_iter().map(Seat::from).collect())
}

pub async fn set_connected(
    txn: &DatabaseTransaction,
    room_id: i64,
    player_id: i64,
    connected: bool,
) -> Result<Seat, DomainError> {
    let seat = seats_adapter::set_connected(txn, room_id, player_id, connected).await?;
    Ok(Seat::from(seat))
}

pub async fn remove_seat(
    txn: &DatabaseTransaction,
    room_id: i64,
    player_id: i64,
) -> Result<bool, DomainError> {
    Ok(seats_adapter::remove_player(txn, room_id, player_id).await?)
}
