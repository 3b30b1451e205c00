use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameStatus {
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "FINISHED")]
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "room_id", unique)]
    pub room_id: i64,
    pub status: GameStatus,
    #[sea_orm(column_name = "current_turn")]
    pub current_turn: i32,
    #[sea_orm(column_name = "current_player_id")]
    pub current_player_id: Option<i64>,
    #[sea_orm(column_name = "winner_player_id")]
    pub winner_player_id: Option<i64>,
    #[sea_orm(column_name = "started_at")]
    pub started_at: OffsetDateTime,
    #[sea_orm(column_name = "ended_at")]
    pub ended_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "version")]
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id",
        on_delete = "Cascade"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::player_sessions::Entity",
        from = "Column::CurrentPlayerId",
        to = "super::player_sessions::Column::Id",
        on_delete = "SetNull"
    )]
    CurrentPlayer,
    #[sea_orm(
        belongs_to = "super::player_sessions::Entity",
        from = "Column::WinnerPlayerId",
        to = "super::player_sessions::Column::Id",
        on_delete = "SetNull"
    )]
    Winner,
    #[sea_orm(has_many = "super::game_players::Entity")]
    GamePlayers,
    #[sea_orm(has_many = "super::game_space_states::Entity")]
    SpaceStates,
    #[sea_orm(has_many = "super::game_deck_states::Entity")]
    DeckStates,
    #[sea_orm(has_many = "super::dice_rolls::Entity")]
    DiceRolls,
    #[sea_orm(has_many = "super::game_event_logs::Entity")]
    EventLogs,
    #[sea_orm(has_many = "super::trade_offers::Entity")]
    TradeOffers,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::game_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePlayers.def()
    }
}

impl Related<super::game_space_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceStates.def()
    }
}

impl Related<super::game_deck_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeckStates.def()
    }
}

impl Related<super::dice_rolls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiceRolls.def()
    }
}

impl Related<super::game_event_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventLogs.def()
    }
}

impl Related<super::trade_offers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeOffers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
