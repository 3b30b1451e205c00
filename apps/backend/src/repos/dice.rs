//! Dice roll history.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::dice_rolls_sea as dice_adapter;
use crate::entities::dice_rolls;
use crate::errors::domain::{DomainError, ValidationKind};

pub use dice_adapter::DiceRollCreate;

fn check_die(value: i16) -> Result<(), DomainError> {
    if (1..=6).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::DiceValue,
            format!("A die shows 1 to 6, got {value}"),
        ))
    }
}

pub async fn record_roll(
    txn: &DatabaseTransaction,
    dto: DiceRollCreate,
) -> Result<dice_rolls::Model, DomainError> {
    check_die(dto.die_one)?;
    check_die(dto.die_two)?;
    Ok(dice_adapter::append(txn, dto).await?)
}

pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<dice_rolls::Model>, DomainError> {
    Ok(dice_adapter::list_by_game(conn, game_id).await?)
}

pub async fn list_for_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    turn_number: i32,
) -> Result<Vec<dice_rolls::Model>, DomainError> {
    Ok(dice_adapter::list_for_turn(conn, game_id, turn_number).await?)
}
