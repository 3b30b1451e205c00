//! SQLite session diagnostics.

use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, Statement};
use tracing::info;

const SNAPSHOT_PRAGMAS: [&str; 4] = ["foreign_keys", "journal_mode", "synchronous", "busy_timeout"];

async fn read_pragma<C: ConnectionTrait>(conn: &C, pragma: &str) -> Result<Option<String>, DbErr> {
    let row = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("PRAGMA {pragma};"),
        ))
        .await?;

    Ok(row.and_then(|row| {
        row.try_get::<String>("", pragma)
            .ok()
            .or_else(|| row.try_get::<i64>("", pragma).ok().map(|v| v.to_string()))
    }))
}

/// Whether the current SQLite session enforces foreign keys.
///
/// Cascades and RESTRICT rules silently do nothing when this is off, so the
/// pool applies `PRAGMA foreign_keys = ON` on every new connection.
pub async fn foreign_keys_enabled<C: ConnectionTrait>(conn: &C) -> Result<bool, DbErr> {
    if conn.get_database_backend() != DatabaseBackend::Sqlite {
        return Ok(true);
    }
    Ok(read_pragma(conn, "foreign_keys").await?.as_deref() == Some("1"))
}

/// Log the PRAGMA values that matter for integrity and locking.
pub async fn log_pragma_snapshot<C: ConnectionTrait>(conn: &C, pool: &str) -> Result<(), DbErr> {
    if conn.get_database_backend() != DatabaseBackend::Sqlite {
        return Ok(());
    }
    for pragma in SNAPSHOT_PRAGMAS {
        if let Some(value) = read_pragma(conn, pragma).await? {
            info!(pool, pragma, value = %value, "sqlite pragma");
        }
    }
    Ok(())
}
