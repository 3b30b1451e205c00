use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::seed::{CardSeed, BOARD, CHANCE, COMMUNITY_CHEST};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum BoardSpaceDefinitions {
    Table,
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
    DeckType,
    Sequence,
    Text,
    ActionCode,
    Parameters,
}

fn seed_err(e: impl std::fmt::Display) -> DbErr {
    DbErr::Custom(format!("seed: {e}"))
}

fn card_values(card: &CardSeed) -> Result<Vec<SimpleExpr>, DbErr> {
    let params: serde_json::Value = serde_json::from_str(card.parameters).map_err(seed_err)?;
    Ok(vec![
        card.deck.into(),
        card.sequence.into(),
        card.text.into(),
        card.action.into(),
        params.into(),
    ])
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();

        let mut spaces = Query::insert();
        spaces.into_table(BoardSpaceDefinitions::Table).columns([
            BoardSpaceDefinitions::SpaceIndex,
            BoardSpaceDefinitions::Name,
            BoardSpaceDefinitions::SpaceType,
            BoardSpaceDefinitions::ColorGroup,
            BoardSpaceDefinitions::Price,
            BoardSpaceDefinitions::HouseCost,
            BoardSpaceDefinitions::MortgageValue,
            BoardSpaceDefinitions::TaxAmount,
            BoardSpaceDefinitions::RentTable,
        ]);
        for space in BOARD.iter() {
            let rent = if space.rent.is_empty() {
                None
            } else {
                Some(serde_json::json!(space.rent))
            };
            spaces
                .values(vec![
                    space.index.into(),
                    space.name.into(),
                    space.space_type.into(),
                    space.color_group.into(),
                    space.price.into(),
                    space.house_cost.into(),
                    space.mortgage_value().into(),
                    space.tax_amount.into(),
                    rent.into(),
                ])
                .map_err(seed_err)?;
        }
        db.execute(backend.build(&spaces)).await?;

        let mut cards = Query::insert();
        cards.into_table(CardDefinitions::Table).columns([
            CardDefinitions::DeckType,
            CardDefinitions::Sequence,
            CardDefinitions::Text,
            CardDefinitions::ActionCode,
            CardDefinitions::Parameters,
        ]);
        for card in CHANCE.iter().chain(COMMUNITY_CHEST.iter()) {
            cards.values(card_values(card)?).map_err(seed_err)?;
        }
        db.execute(backend.build(&cards)).await?;

        tracing::info!(
            spaces = BOARD.len(),
            cards = CHANCE.len() + COMMUNITY_CHEST.len(),
            "seeded classic edition"
        );
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();

        // Fails while any game still references the seeded rows.
        let cards = Query::delete()
            .from_table(CardDefinitions::Table)
            .and_where(Expr::col(CardDefinitions::DeckType).is_in(["CHANCE", "COMMUNITY_CHEST"]))
            .to_owned();
        db.execute(backend.build(&cards)).await?;

        let spaces = Query::delete()
            .from_table(BoardSpaceDefinitions::Table)
            .and_where(Expr::col(BoardSpaceDefinitions::SpaceIndex).between(0, 39))
            .to_owned();
        db.execute(backend.build(&spaces)).await?;

        Ok(())
    }
}
