use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(DeriveIden)]
enum PlayerSessions {
    Table,
    Id,
    DisplayName,
    TokenHash,
    CreatedAt,
    LastSeenAt,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    Code,
    OwnerId,
    Status,
    MaxPlayers,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RoomPlayers {
    Table,
    RoomId,
    PlayerId,
    Seat,
    TurnOrder,
    Token,
    IsConnected,
    JoinedAt,
}

#[derive(DeriveIden)]
enum ChatMessages {
    Table,
    Id,
    RoomId,
    PlayerId,
    Body,
    SentAt,
}

#[derive(DeriveIden)]
enum BoardSpaceDefinitions {
    Table,
    Id,
    SpaceIndex,
    Name,
    SpaceType,
    ColorGroup,
    Price,
    HouseCost,
    MortgageValue,
    TaxAmount,
    RentTable,
}

#[derive(DeriveIden)]
enum CardDefinitions {
    Table,
    Id,
    DeckType,
    Sequence,
    Text,
    ActionCode,
    Parameters,
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    RoomId,
    Status,
    CurrentTurn,
    CurrentPlayerId,
    WinnerPlayerId,
    StartedAt,
    EndedAt,
    UpdatedAt,
    Version,
}

#[derive(DeriveIden)]
enum GamePlayers {
    Table,
    GameId,
    PlayerId,
    TurnOrder,
    Cash,
    Position,
    InJail,
    JailTurns,
    ConsecutiveDoubles,
    AutoRollStrikes,
    IsBankrupt,
    UpdatedAt,
    Version,
}

#[derive(DeriveIden)]
enum GameSpaceStates {
    Table,
    GameId,
    BoardSpaceId,
    OwnerPlayerId,
    Houses,
    HasHotel,
    IsMortgaged,
    UpdatedAt,
    Version,
}

#[derive(DeriveIden)]
enum GameDeckStates {
    Table,
    GameId,
    DeckType,
    DrawCursor,
    ShuffleSeed,
    ReshuffleCount,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GameDeckCardOrders {
    Table,
    GameId,
    DeckType,
    Position,
    CardId,
}

#[derive(DeriveIden)]
enum DiceRolls {
    Table,
    Id,
    GameId,
    PlayerId,
    TurnNumber,
    DieOne,
    DieTwo,
    IsAutoRoll,
    RolledAt,
}

#[derive(DeriveIden)]
enum GameEventLogs {
    Table,
    Id,
    GameId,
    TurnNumber,
    EventType,
    Payload,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TradeOffers {
    Table,
    Id,
    GameId,
    OffererId,
    RecipientId,
    CashFromOfferer,
    CashFromRecipient,
    Status,
    CreatedAt,
    UpdatedAt,
    ResolvedAt,
}

#[derive(DeriveIden)]
enum TradeOfferProperties {
    Table,
    TradeOfferId,
    BoardSpaceId,
    Direction,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // player_sessions
        manager
            .create_table(
                Table::create()
                    .table(PlayerSessions::Table)
                    .if_not_exists()
                    .col(id_col(PlayerSessions::Id))
                    .col(
                        ColumnDef::new(PlayerSessions::DisplayName)
                            .string_len(40)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerSessions::TokenHash)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(timestamp_col(PlayerSessions::CreatedAt))
                    .col(timestamp_col(PlayerSessions::LastSeenAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_player_sessions_token_hash")
                    .table(PlayerSessions::Table)
                    .col(PlayerSessions::TokenHash)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rooms
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(id_col(Rooms::Id))
                    .col(ColumnDef::new(Rooms::Code).string_len(10).not_null())
                    .col(ColumnDef::new(Rooms::OwnerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::Status)
                            .string_len(16)
                            .not_null()
                            .default("WAITING"),
                    )
                    .col(
                        ColumnDef::new(Rooms::MaxPlayers)
                            .small_integer()
                            .not_null()
                            .default(6)
                            .check(Expr::col(Rooms::MaxPlayers).between(2, 8)),
                    )
                    .col(timestamp_col(Rooms::CreatedAt))
                    .col(timestamp_col(Rooms::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_owner_id")
                            .from(Rooms::Table, Rooms::OwnerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_rooms_code")
                    .table(Rooms::Table)
                    .col(Rooms::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rooms_owner_id")
                    .table(Rooms::Table)
                    .col(Rooms::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rooms_status")
                    .table(Rooms::Table)
                    .col(Rooms::Status)
                    .to_owned(),
            )
            .await?;

        // room_players
        manager
            .create_table(
                Table::create()
                    .table(RoomPlayers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RoomPlayers::RoomId).big_integer().not_null())
                    .col(
                        ColumnDef::new(RoomPlayers::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoomPlayers::Seat)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(RoomPlayers::Seat).between(0, 7)),
                    )
                    .col(
                        ColumnDef::new(RoomPlayers::TurnOrder)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoomPlayers::Token).string_len(16).not_null())
                    .col(
                        ColumnDef::new(RoomPlayers::IsConnected)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp_col(RoomPlayers::JoinedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_room_players")
                            .col(RoomPlayers::RoomId)
                            .col(RoomPlayers::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_players_room_id")
                            .from(RoomPlayers::Table, RoomPlayers::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_players_player_id")
                            .from(RoomPlayers::Table, RoomPlayers::PlayerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_room_players_room_seat")
                    .table(RoomPlayers::Table)
                    .col(RoomPlayers::RoomId)
                    .col(RoomPlayers::Seat)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_room_players_room_token")
                    .table(RoomPlayers::Table)
                    .col(RoomPlayers::RoomId)
                    .col(RoomPlayers::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_room_players_player_id")
                    .table(RoomPlayers::Table)
                    .col(RoomPlayers::PlayerId)
                    .to_owned(),
            )
            .await?;

        // chat_messages
        manager
            .create_table(
                Table::create()
                    .table(ChatMessages::Table)
                    .if_not_exists()
                    .col(id_col(ChatMessages::Id))
                    .col(ColumnDef::new(ChatMessages::RoomId).big_integer().not_null())
                    .col(ColumnDef::new(ChatMessages::PlayerId).big_integer().null())
                    .col(ColumnDef::new(ChatMessages::Body).text().not_null())
                    .col(timestamp_col(ChatMessages::SentAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_messages_room_id")
                            .from(ChatMessages::Table, ChatMessages::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_messages_player_id")
                            .from(ChatMessages::Table, ChatMessages::PlayerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_chat_messages_room_sent")
                    .table(ChatMessages::Table)
                    .col(ChatMessages::RoomId)
                    .col(ChatMessages::SentAt)
                    .to_owned(),
            )
            .await?;

        // board_space_definitions (static edition data)
        manager
            .create_table(
                Table::create()
                    .table(BoardSpaceDefinitions::Table)
                    .if_not_exists()
                    .col(id_col(BoardSpaceDefinitions::Id))
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::SpaceIndex)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(BoardSpaceDefinitions::SpaceIndex).between(0, 39)),
                    )
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::Name)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::SpaceType)
                            .string_len(24)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::ColorGroup)
                            .string_len(16)
                            .null(),
                    )
                    .col(ColumnDef::new(BoardSpaceDefinitions::Price).integer().null())
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::HouseCost)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::MortgageValue)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::TaxAmount)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(BoardSpaceDefinitions::RentTable)
                            .json_binary()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_board_space_definitions_index")
                    .table(BoardSpaceDefinitions::Table)
                    .col(BoardSpaceDefinitions::SpaceIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // card_definitions (static edition data)
        manager
            .create_table(
                Table::create()
                    .table(CardDefinitions::Table)
                    .if_not_exists()
                    .col(id_col(CardDefinitions::Id))
                    .col(
                        ColumnDef::new(CardDefinitions::DeckType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CardDefinitions::Sequence)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CardDefinitions::Text).text().not_null())
                    .col(
                        ColumnDef::new(CardDefinitions::ActionCode)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CardDefinitions::Parameters)
                            .json_binary()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_card_definitions_deck_sequence")
                    .table(CardDefinitions::Table)
                    .col(CardDefinitions::DeckType)
                    .col(CardDefinitions::Sequence)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(id_col(Games::Id))
                    .col(ColumnDef::new(Games::RoomId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Games::Status)
                            .string_len(16)
                            .not_null()
                            .default("IN_PROGRESS"),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentTurn)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Games::CurrentPlayerId).big_integer().null())
                    .col(ColumnDef::new(Games::WinnerPlayerId).big_integer().null())
                    .col(timestamp_col(Games::StartedAt))
                    .col(
                        ColumnDef::new(Games::EndedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_col(Games::UpdatedAt))
                    .col(
                        ColumnDef::new(Games::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_room_id")
                            .from(Games::Table, Games::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_current_player_id")
                            .from(Games::Table, Games::CurrentPlayerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_winner_player_id")
                            .from(Games::Table, Games::WinnerPlayerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // One game per room
        manager
            .create_index(
                Index::create()
                    .name("ux_games_room_id")
                    .table(Games::Table)
                    .col(Games::RoomId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // game_players
        manager
            .create_table(
                Table::create()
                    .table(GamePlayers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GamePlayers::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GamePlayers::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::TurnOrder)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GamePlayers::Cash).integer().not_null())
                    .col(
                        ColumnDef::new(GamePlayers::Position)
                            .small_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(GamePlayers::Position).between(0, 39)),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::InJail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::JailTurns)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::ConsecutiveDoubles)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::AutoRollStrikes)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::IsBankrupt)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_col(GamePlayers::UpdatedAt))
                    .col(
                        ColumnDef::new(GamePlayers::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_game_players")
                            .col(GamePlayers::GameId)
                            .col(GamePlayers::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_game_id")
                            .from(GamePlayers::Table, GamePlayers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_player_id")
                            .from(GamePlayers::Table, GamePlayers::PlayerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_players_game_turn")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::GameId)
                    .col(GamePlayers::TurnOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_game_players_player_id")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::PlayerId)
                    .to_owned(),
            )
            .await?;

        // game_space_states
        manager
            .create_table(
                Table::create()
                    .table(GameSpaceStates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameSpaceStates::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameSpaceStates::BoardSpaceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameSpaceStates::OwnerPlayerId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GameSpaceStates::Houses)
                            .small_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(GameSpaceStates::Houses).between(0, 4)),
                    )
                    .col(
                        ColumnDef::new(GameSpaceStates::HasHotel)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(GameSpaceStates::IsMortgaged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_col(GameSpaceStates::UpdatedAt))
                    .col(
                        ColumnDef::new(GameSpaceStates::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_game_space_states")
                            .col(GameSpaceStates::GameId)
                            .col(GameSpaceStates::BoardSpaceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_space_states_game_id")
                            .from(GameSpaceStates::Table, GameSpaceStates::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_space_states_board_space_id")
                            .from(GameSpaceStates::Table, GameSpaceStates::BoardSpaceId)
                            .to(BoardSpaceDefinitions::Table, BoardSpaceDefinitions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_space_states_owner_player_id")
                            .from(GameSpaceStates::Table, GameSpaceStates::OwnerPlayerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_game_space_states_owner")
                    .table(GameSpaceStates::Table)
                    .col(GameSpaceStates::GameId)
                    .col(GameSpaceStates::OwnerPlayerId)
                    .to_owned(),
            )
            .await?;

        // game_deck_states
        manager
            .create_table(
                Table::create()
                    .table(GameDeckStates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameDeckStates::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameDeckStates::DeckType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameDeckStates::DrawCursor)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GameDeckStates::ShuffleSeed)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameDeckStates::ReshuffleCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(timestamp_col(GameDeckStates::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_game_deck_states")
                            .col(GameDeckStates::GameId)
                            .col(GameDeckStates::DeckType),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_deck_states_game_id")
                            .from(GameDeckStates::Table, GameDeckStates::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // game_deck_card_orders
        manager
            .create_table(
                Table::create()
                    .table(GameDeckCardOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameDeckCardOrders::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameDeckCardOrders::DeckType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameDeckCardOrders::Position)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameDeckCardOrders::CardId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_game_deck_card_orders")
                            .col(GameDeckCardOrders::GameId)
                            .col(GameDeckCardOrders::DeckType)
                            .col(GameDeckCardOrders::Position),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_deck_card_orders_game_id")
                            .from(GameDeckCardOrders::Table, GameDeckCardOrders::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_deck_card_orders_card_id")
                            .from(GameDeckCardOrders::Table, GameDeckCardOrders::CardId)
                            .to(CardDefinitions::Table, CardDefinitions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // A card appears at most once in a persisted deck
        manager
            .create_index(
                Index::create()
                    .name("ux_game_deck_card_orders_card")
                    .table(GameDeckCardOrders::Table)
                    .col(GameDeckCardOrders::GameId)
                    .col(GameDeckCardOrders::DeckType)
                    .col(GameDeckCardOrders::CardId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // dice_rolls (append-only)
        manager
            .create_table(
                Table::create()
                    .table(DiceRolls::Table)
                    .if_not_exists()
                    .col(id_col(DiceRolls::Id))
                    .col(ColumnDef::new(DiceRolls::GameId).big_integer().not_null())
                    .col(ColumnDef::new(DiceRolls::PlayerId).big_integer().null())
                    .col(ColumnDef::new(DiceRolls::TurnNumber).integer().not_null())
                    .col(
                        ColumnDef::new(DiceRolls::DieOne)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(DiceRolls::DieOne).between(1, 6)),
                    )
                    .col(
                        ColumnDef::new(DiceRolls::DieTwo)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(DiceRolls::DieTwo).between(1, 6)),
                    )
                    .col(
                        ColumnDef::new(DiceRolls::IsAutoRoll)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp_col(DiceRolls::RolledAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_rolls_game_id")
                            .from(DiceRolls::Table, DiceRolls::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_rolls_player_id")
                            .from(DiceRolls::Table, DiceRolls::PlayerId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_dice_rolls_game_turn")
                    .table(DiceRolls::Table)
                    .col(DiceRolls::GameId)
                    .col(DiceRolls::TurnNumber)
                    .to_owned(),
            )
            .await?;

        // game_event_logs (append-only)
        manager
            .create_table(
                Table::create()
                    .table(GameEventLogs::Table)
                    .if_not_exists()
                    .col(id_col(GameEventLogs::Id))
                    .col(
                        ColumnDef::new(GameEventLogs::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameEventLogs::TurnNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameEventLogs::EventType)
                            .string_len(48)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameEventLogs::Payload)
                            .json_binary()
                            .not_null(),
                    )
                    .col(timestamp_col(GameEventLogs::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_event_logs_game_id")
                            .from(GameEventLogs::Table, GameEventLogs::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_game_event_logs_game_id")
                    .table(GameEventLogs::Table)
                    .col(GameEventLogs::GameId)
                    .col(GameEventLogs::Id)
                    .to_owned(),
            )
            .await?;

        // trade_offers
        manager
            .create_table(
                Table::create()
                    .table(TradeOffers::Table)
                    .if_not_exists()
                    .col(id_col(TradeOffers::Id))
                    .col(ColumnDef::new(TradeOffers::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(TradeOffers::OffererId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradeOffers::RecipientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradeOffers::CashFromOfferer)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(TradeOffers::CashFromOfferer).gte(0)),
                    )
                    .col(
                        ColumnDef::new(TradeOffers::CashFromRecipient)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(TradeOffers::CashFromRecipient).gte(0)),
                    )
                    .col(
                        ColumnDef::new(TradeOffers::Status)
                            .string_len(16)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(timestamp_col(TradeOffers::CreatedAt))
                    .col(timestamp_col(TradeOffers::UpdatedAt))
                    .col(
                        ColumnDef::new(TradeOffers::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trade_offers_game_id")
                            .from(TradeOffers::Table, TradeOffers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trade_offers_offerer_id")
                            .from(TradeOffers::Table, TradeOffers::OffererId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trade_offers_recipient_id")
                            .from(TradeOffers::Table, TradeOffers::RecipientId)
                            .to(PlayerSessions::Table, PlayerSessions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_trade_offers_game_status")
                    .table(TradeOffers::Table)
                    .col(TradeOffers::GameId)
                    .col(TradeOffers::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_trade_offers_recipient_id")
                    .table(TradeOffers::Table)
                    .col(TradeOffers::RecipientId)
                    .to_owned(),
            )
            .await?;

        // trade_offer_properties
        manager
            .create_table(
                Table::create()
                    .table(TradeOfferProperties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TradeOfferProperties::TradeOfferId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradeOfferProperties::BoardSpaceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TradeOfferProperties::Direction)
                            .string_len(24)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_trade_offer_properties")
                            .col(TradeOfferProperties::TradeOfferId)
                            .col(TradeOfferProperties::BoardSpaceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trade_offer_properties_trade_offer_id")
                            .from(TradeOfferProperties::Table, TradeOfferProperties::TradeOfferId)
                            .to(TradeOffers::Table, TradeOffers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trade_offer_properties_board_space_id")
                            .from(TradeOfferProperties::Table, TradeOfferProperties::BoardSpaceId)
                            .to(BoardSpaceDefinitions::Table, BoardSpaceDefinitions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children before parents; indexes go with their tables.
        manager
            .drop_table(
                Table::drop()
                    .table(TradeOfferProperties::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TradeOffers::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(GameEventLogs::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DiceRolls::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(GameDeckCardOrders::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(GameDeckStates::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(GameSpaceStates::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GamePlayers::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(CardDefinitions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(BoardSpaceDefinitions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatMessages::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RoomPlayers::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Rooms::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(PlayerSessions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
