use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum TradeDirection {
    #[sea_orm(string_value = "OFFERER_TO_RECIPIENT")]
    OffererToRecipient,
    #[sea_orm(string_value = "RECIPIENT_TO_OFFERER")]
    RecipientToOfferer,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_offer_properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "trade_offer_id")]
    pub trade_offer_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "board_space_id")]
    pub board_space_id: i64,
    pub direction: TradeDirection,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trade_offers::Entity",
        from = "Column::TradeOfferId",
        to = "super::trade_offers::Column::Id",
        on_delete = "Cascade"
    )]
    TradeOffer,
    #[sea_orm(
        belongs_to = "super::board_space_definitions::Entity",
        from = "Column::BoardSpaceId",
        to = "super::board_space_definitions::Column::Id",
        on_delete = "Restrict"
    )]
    BoardSpace,
}

impl Related<super::trade_offers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TradeOffer.def()
    }
}

impl Related<super::board_space_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardSpace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
