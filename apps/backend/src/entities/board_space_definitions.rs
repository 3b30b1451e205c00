use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum SpaceType {
    #[sea_orm(string_value = "GO")]
    Go,
    #[sea_orm(string_value = "PROPERTY")]
    Property,
    #[sea_orm(string_value = "RAILROAD")]
    Railroad,
    #[sea_orm(string_value = "UTILITY")]
    Utility,
    #[sea_orm(string_value = "TAX")]
    Tax,
    #[sea_orm(string_value = "CHANCE")]
    Chance,
    #[sea_orm(string_value = "COMMUNITY_CHEST")]
    CommunityChest,
    #[sea_orm(string_value = "JAIL")]
    Jail,
    #[sea_orm(string_value = "FREE_PARKING")]
    FreeParking,
    #[sea_orm(string_value = "GO_TO_JAIL")]
    GoToJail,
}

impl SpaceType {
    /// Spaces that can be bought and therefore carry per-game ownership state.
    pub fn is_ownable(self) -> bool {
        matches!(self, SpaceType::Property | SpaceType::Railroad | SpaceType::Utility)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ColorGroup {
    #[sea_orm(string_value = "BROWN")]
    Brown,
    #[sea_orm(string_value = "LIGHT_BLUE")]
    LightBlue,
    #[sea_orm(string_value = "PINK")]
    Pink,
    #[sea_orm(string_value = "ORANGE")]
    Orange,
    #[sea_orm(string_value = "RED")]
    Red,
    #[sea_orm(string_value = "YELLOW")]
    Yellow,
    #[sea_orm(string_value = "GREEN")]
    Green,
    #[sea_orm(string_value = "DARK_BLUE")]
    DarkBlue,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "board_space_definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "space_index", column_type = "SmallInteger", unique)]
    pub space_index: i16,
    pub name: String,
    #[sea_orm(column_name = "space_type")]
    pub space_type: SpaceType,
    #[sea_orm(column_name = "color_group")]
    pub color_group: Option<ColorGroup>,
    pub price: Option<i32>,
    #[sea_orm(column_name = "house_cost")]
    pub house_cost: Option<i32>,
    #[sea_orm(column_name = "mortgage_value")]
    pub mortgage_value: Option<i32>,
    #[sea_orm(column_name = "tax_amount")]
    pub tax_amount: Option<i32>,
    /// JSON integer array: base rent then 1..4 houses then hotel for streets,
    /// by railroads owned for railroads, dice multipliers for utilities.
    #[sea_orm(column_name = "rent_table", column_type = "JsonBinary", nullable)]
    pub rent_table: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_space_states::Entity")]
    SpaceStates,
    #[sea_orm(has_many = "super::trade_offer_properties::Entity")]
    TradeOfferProperties,
}

impl Related<super::game_space_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceStates.def()
    }
}

impl Related<super::trade_offer_properties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeOfferProperties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
