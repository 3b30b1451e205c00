//! Services composing repo calls into lobby and game lifecycle operations.
//!
//! Every function takes the caller's transaction, so a whole operation
//! commits or rolls back together under `with_txn`.

pub mod decks;
pub mod game_setup;
pub mod lobby;
