use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DeckType {
    #[sea_orm(string_value = "CHANCE")]
    Chance,
    #[sea_orm(string_value = "COMMUNITY_CHEST")]
    CommunityChest,
}

/// What a card does; the free-form `parameters` column carries the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum CardAction {
    #[sea_orm(string_value = "ADVANCE_TO")]
    AdvanceTo,
    #[sea_orm(string_value = "ADVANCE_TO_NEAREST")]
    AdvanceToNearest,
    #[sea_orm(string_value = "MOVE_BY")]
    MoveBy,
    #[sea_orm(string_value = "COLLECT")]
    Collect,
    #[sea_orm(string_value = "PAY")]
    Pay,
    #[sea_orm(string_value = "COLLECT_FROM_EACH_PLAYER")]
    CollectFromEachPlayer,
    #[sea_orm(string_value = "PAY_EACH_PLAYER")]
    PayEachPlayer,
    #[sea_orm(string_value = "GO_TO_JAIL")]
    GoToJail,
    #[sea_orm(string_value = "GET_OUT_OF_JAIL")]
    GetOutOfJail,
    #[sea_orm(string_value = "REPAIRS")]
    Repairs,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "card_definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "deck_type")]
    pub deck_type: DeckType,
    #[sea_orm(column_type = "SmallInteger")]
    pub sequence: i16,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    #[sea_orm(column_name = "action_code")]
    pub action_code: CardAction,
    #[sea_orm(column_type = "JsonBinary")]
    pub parameters: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_deck_card_orders::Entity")]
    DeckOrders,
}

impl Related<super::game_deck_card_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeckOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
