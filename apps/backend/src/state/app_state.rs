use sea_orm::DatabaseConnection;

use crate::config::game::GameConfig;

/// Shared application state handed to handlers via `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    db: Option<DatabaseConnection>,
    pub game: GameConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, game: GameConfig) -> Self {
        Self { db: Some(db), game }
    }

    /// State with no database; handlers that need one fail with `DbUnavailable`.
    pub fn without_db(game: GameConfig) -> Self {
        Self { db: None, game }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
