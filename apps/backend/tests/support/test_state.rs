use backend::config::game::GameConfig;
use backend::{build_state, AppError, AppState, DbKind, RuntimeEnv};

/// Backend under test; `MONOPOLY_TEST_DB_KIND=postgres` runs the suites against Postgres.
pub fn test_db_kind() -> Result<DbKind, AppError> {
    Ok(DbKind::from_env("MONOPOLY_TEST_DB_KIND", DbKind::SqliteMemory)?)
}

/// Migrated and seeded state in the test environment.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(test_db_kind()?)
        .with_game_config(GameConfig::default())
        .build()
        .await
}
