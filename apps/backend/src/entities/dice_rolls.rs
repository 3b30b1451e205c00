use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dice_rolls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: Option<i64>,
    #[sea_orm(column_name = "turn_number")]
    pub turn_number: i32,
    #[sea_orm(column_name = "die_one", column_type = "SmallInteger")]
    pub die_one: i16,
    #[sea_orm(column_name = "die_two", column_type = "SmallInteger")]
    pub die_two: i16,
    #[sea_orm(column_name = "is_auto_roll")]
    pub is_auto_roll: bool,
    #[sea_orm(column_name = "rolled_at")]
    pub rolled_at: OffsetDateTime,
}

impl Model {
    pub fn total(&self) -> i16 {
        self.die_one + self.die_two
    }

    pub fn is_double(&self) -> bool {
        self.die_one == self.die_two
    }
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
        on_delete = "SetNull"
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
