//! SeaORM entities, one module per table.

pub mod board_space_definitions;
pub mod card_definitions;
pub mod chat_messages;
pub mod dice_rolls;
pub mod game_deck_card_orders;
pub mod game_deck_states;
pub mod game_event_logs;
pub mod game_players;
pub mod game_space_states;
pub mod games;
pub mod player_sessions;
pub mod room_players;
pub mod rooms;
pub mod trade_offer_properties;
pub mod trade_offers;

pub use board_space_definitions::{ColorGroup, SpaceType};
pub use card_definitions::{CardAction, DeckType};
pub use games::GameStatus;
pub use room_players::PlayerToken;
pub use rooms::RoomStatus;
pub use trade_offer_properties::TradeDirection;
pub use trade_offers::TradeStatus;
