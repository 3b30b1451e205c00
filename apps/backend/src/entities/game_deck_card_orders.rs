use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::card_definitions::DeckType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_deck_card_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "deck_type")]
    pub deck_type: DeckType,
    #[sea_orm(primary_key, auto_increment = false, column_type = "SmallInteger")]
    pub position: i16,
    #[sea_orm(column_name = "card_id")]
    pub card_id: i64,
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
        belongs_to = "super::card_definitions::Entity",
        from = "Column::CardId",
        to = "super::card_definitions::Column::Id",
        on_delete = "Restrict"
    )]
    Card,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::card_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
