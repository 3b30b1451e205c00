//! Turning a full room into a running game.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sea_orm::DatabaseTransaction;
use serde_json::json;
use tracing::{debug, info};

use crate::config::game::GameConfig;
use crate::entities::card_definitions::DeckType;
use crate::entities::rooms::RoomStatus;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::Game;
use crate::repos::{board, decks, events, games, players, rooms, spaces};

pub const GAME_STARTED_EVENT: &str = "GAME_STARTED";

/// Inputs that make a game reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSetup {
    pub seed: u64,
    pub starting_cash: i32,
}

impl GameSetup {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            seed,
            starting_cash: config.starting_cash,
        }
    }
}

/// Per-deck seed so the two decks never share an order.
pub fn derive_deck_seed(game_seed: u64, deck: DeckType) -> u64 {
    let salt = match deck {
        DeckType::Chance => 1,
        DeckType::CommunityChest => 2,
    };
    game_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(salt)
}

/// Deterministic order of `card_ids` for a seed.
pub fn shuffled_order(card_ids: &[i64], seed: u64) -> Vec<i64> {
    let mut order = card_ids.to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

/// Game setup service.
pub struct GameSetupService;

impl GameSetupService {
    pub fn new() -> Self {
        Self
    }

    /// Start the game of a waiting room.
    ///
    /// Everything happens in the caller's transaction: the room flips to
    /// STARTED by compare-and-set, then the game, one player row per seat,
    /// one space state per ownable space, both shuffled decks and the
    /// GAME_STARTED event are written.
    pub async fn start_game(
        &self,
        txn: &DatabaseTransaction,
        room_id: i64,
        setup: GameSetup,
    ) -> Result<Game, AppError> {
        rooms::set_status(txn, room_id, RoomStatus::Waiting, RoomStatus::Started).await?;

        let seats = rooms::list_seats(txn, room_id).await?;
        if seats.len() < 2 {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                "At least two seated players are needed to start",
            )
            .into());
        }

        let first_player = seats.first().map(|s| s.player_id);
        let game = games::create_game(txn, room_id, first_player).await?;

        for (turn_order, seat) in seats.iter().enumerate() {
            players::create_player(
                txn,
                game.id,
                seat.player_id,
                turn_order as u8,
                setup.starting_cash,
            )
            .await?;
        }

        let ownable = board::list_ownable_spaces(txn).await?;
        for space in &ownable {
            spaces::create_space_state(txn, game.id, space.id).await?;
        }

        for deck in [DeckType::Chance, DeckType::CommunityChest] {
            let seed = derive_deck_seed(setup.seed, deck);
            let card_ids: Vec<i64> = board::list_cards(txn, deck)
                .await?
                .into_iter()
                .map(|c| c.id)
                .collect();
            let order = shuffled_order(&card_ids, seed);
            decks::create_deck(txn, game.id, deck, seed as i64, &order).await?;
            debug!(game_id = game.id, ?deck, cards = order.len(), "Deck shuffled");
        }

        let player_ids: Vec<i64> = seats.iter().map(|s| s.player_id).collect();
        events::append_event(
            txn,
            game.id,
            0,
            GAME_STARTED_EVENT,
            json!({
                "room_id": room_id,
                "players": player_ids,
                "starting_cash": setup.starting_cash,
                "seed": setup.seed,
            }),
        )
        .await?;

        info!(
            game_id = game.id,
            room_id,
            players = seats.len(),
            spaces = ownable.len(),
            "Game started"
        );
        Ok(game)
    }
}

impl Default for GameSetupService {
    fn default() -> Self {
        Self::new()
    }
}
