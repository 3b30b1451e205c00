//! Builders for the rows most tests need before they can start.

use backend::config::game::GameConfig;
use backend::entities::room_players::PlayerToken;
use backend::repos::games::Game;
use backend::repos::rooms::Room;
use backend::repos::sessions::{self, Session};
use backend::services::game_setup::{GameSetup, GameSetupService};
use backend::services::lobby;
use backend::AppError;
use backend_test_support::unique_helpers::{unique_display_name, unique_seed, unique_str};
use sea_orm::DatabaseTransaction;

/// Tokens handed out in seat order.
pub const TOKENS: [PlayerToken; 8] = [
    PlayerToken::Car,
    PlayerToken::Dog,
    PlayerToken::Hat,
    PlayerToken::Ship,
    PlayerToken::Boot,
    PlayerToken::Thimble,
    PlayerToken::Iron,
    PlayerToken::Wheelbarrow,
];

/// A session row with a unique name and token hash, bypassing token generation.
pub async fn create_session(txn: &DatabaseTransaction, prefix: &str) -> Result<Session, AppError> {
    let hash = blake3::hash(unique_str(prefix).as_bytes()).to_hex().to_string();
    Ok(sessions::create_session(txn, &unique_display_name(prefix), &hash).await?)
}

/// A waiting room with `players` seated players; the first one owns it.
pub async fn create_room_with_players(
    txn: &DatabaseTransaction,
    players: usize,
    max_players: u8,
) -> Result<(Room, Vec<Session>), AppError> {
    let owner = create_session(txn, "owner").await?;
    let (room, _) = lobby::create_room(txn, owner.id, max_players, TOKENS[0]).await?;

    let mut sessions = vec![owner];
    for token in TOKENS.iter().take(players).skip(1) {
        let guest = create_session(txn, "guest").await?;
        lobby::join_room(txn, &room.code, guest.id, *token).await?;
        sessions.push(guest);
    }
    Ok((room, sessions))
}

pub struct StartedGame {
    pub room: Room,
    pub players: Vec<Session>,
    pub game: Game,
    pub seed: u64,
}

/// A room of `players` players that has been started with a random seed.
pub async fn start_game(txn: &DatabaseTransaction, players: usize) -> Result<StartedGame, AppError> {
    start_game_with_seed(txn, players, unique_seed()).await
}

pub async fn start_game_with_seed(
    txn: &DatabaseTransaction,
    players: usize,
    seed: u64,
) -> Result<StartedGame, AppError> {
    let (room, players) = create_room_with_players(txn, players, 8).await?;
    let setup = GameSetup::new(seed, &GameConfig::default());
    let game = GameSetupService::new()
        .start_game(txn, room.id, setup)
        .await?;
    Ok(StartedGame {
        room,
        players,
        game,
        seed,
    })
}
