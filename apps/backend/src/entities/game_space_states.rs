use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_space_states")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "board_space_id")]
    pub board_space_id: i64,
    #[sea_orm(column_name = "owner_player_id")]
    pub owner_player_id: Option<i64>,
    #[sea_orm(column_type = "SmallInteger")]
    pub houses: i16,
    #[sea_orm(column_name = "has_hotel")]
    pub has_hotel: bool,
    #[sea_orm(column_name = "is_mortgaged")]
    pub is_mortgaged: bool,
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
        belongs_to = "super::board_space_definitions::Entity",
        from = "Column::BoardSpaceId",
        to = "super::board_space_definitions::Column::Id",
        on_delete = "Restrict"
    )]
    BoardSpace,
    #[sea_orm(
        belongs_to = "super::player_sessions::Entity",
        from = "Column::OwnerPlayerId",
        to = "super::player_sessions::Column::Id",
        on_delete = "SetNull"
    )]
    Owner,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::board_space_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardSpace.def()
    }
}

impl Related<super::player_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
