//! Repository functions for the domain layer.
//!
//! Reads are generic over `ConnectionTrait`; writes take the caller's
//! transaction. Every function returns `DomainError`.

pub mod board;
pub mod chat;
pub mod decks;
pub mod dice;
pub mod events;
pub mod games;
pub mod players;
pub mod rooms;
pub mod sessions;
pub mod spaces;
pub mod trades;
