use std::env;

use crate::error::AppError;

pub const DEFAULT_STARTING_CASH: i32 = 1500;

/// Edition-level knobs that are not part of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_cash: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_cash: DEFAULT_STARTING_CASH,
        }
    }
}

impl GameConfig {
    /// Reads `MONOPOLY_STARTING_CASH`; unset falls back to the classic 1500.
    pub fn from_env() -> Result<Self, AppError> {
        let starting_cash = match env::var("MONOPOLY_STARTING_CASH") {
            Ok(raw) => raw.trim().parse::<i32>().map_err(|e| {
                AppError::config(format!("MONOPOLY_STARTING_CASH must be an integer: {e}"))
            })?,
            Err(env::VarError::NotPresent) => DEFAULT_STARTING_CASH,
            Err(e) => {
                return Err(AppError::config(format!(
                    "failed to read MONOPOLY_STARTING_CASH: {e}"
                )))
            }
        };

        if starting_cash < 0 {
            return Err(AppError::config("MONOPOLY_STARTING_CASH must not be negative"));
        }

        Ok(Self { starting_cash })
    }
}
