use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Board piece a player moves around the board; unique within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PlayerToken {
    #[sea_orm(string_value = "CAR")]
    Car,
    #[sea_orm(string_value = "DOG")]
    Dog,
    #[sea_orm(string_value = "HAT")]
    Hat,
    #[sea_orm(string_value = "SHIP")]
    Ship,
    #[sea_orm(string_value = "BOOT")]
    Boot,
    #[sea_orm(string_value = "THIMBLE")]
    Thimble,
    #[sea_orm(string_value = "IRON")]
    Iron,
    #[sea_orm(string_value = "WHEELBARROW")]
    Wheelbarrow,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room_players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "room_id")]
    pub room_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_type = "SmallInteger")]
    pub seat: i16,
    #[sea_orm(column_name = "turn_order", column_type = "SmallInteger")]
    pub turn_order: i16,
    pub token: PlayerToken,
    #[sea_orm(column_name = "is_connected")]
    pub is_connected: bool,
    #[sea_orm(column_name = "joined_at")]
    pub joined_at: OffsetDateTime,
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
        from = "Column::PlayerId",
        to = "super::player_sessions::Column::Id",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::player_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
