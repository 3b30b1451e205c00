use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Per-game player state. Jail, doubles and strike counters are stored for the
/// turn engine; nothing here interprets them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "player_id")]
    pub player_id: i64,
    #[sea_orm(column_name = "turn_order", column_type = "SmallInteger")]
    pub turn_order: i16,
    pub cash: i32,
    #[sea_orm(column_type = "SmallInteger")]
    pub position: i16,
    #[sea_orm(column_name = "in_jail")]
    pub in_jail: bool,
    #[sea_orm(column_name = "jail_turns", column_type = "SmallInteger")]
    pub jail_turns: i16,
    #[sea_orm(column_name = "consecutive_doubles", column_type = "SmallInteger")]
    pub consecutive_doubles: i16,
    #[sea_orm(column_name = "auto_roll_strikes", column_type = "SmallInteger")]
    pub auto_roll_strikes: i16,
    #[sea_orm(column_name = "is_bankrupt")]
    pub is_bankrupt: bool,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "version")]
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::player_sessions::Entity",
        from = "Column::PlayerId",
        to = "super::player_sessions::Column::Id",
        on_delete = "Restrict"
    )]
    Player,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::player_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
