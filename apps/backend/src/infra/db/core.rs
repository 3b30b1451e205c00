use std::process;
use std::str::FromStr;

use db_infra::{build_admin_pool, orchestrate_migration_internal};
use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, trace};

use super::diagnostics;
use super::{DbKind, DbOwner, RuntimeEnv};
use crate::config::db::{
    build_connection_settings, build_session_statements, make_conn_spec, validate_db_config,
    ConnectionSettings, PoolPurpose,
};
use crate::error::AppError;

fn engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Runtime pool with per-connection session statements applied in `after_connect`.
///
/// Built on raw sqlx pools so the hook runs for every connection the pool
/// opens, not just the first one.
pub async fn build_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    settings: &ConnectionSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = make_conn_spec(env, db_kind, DbOwner::App)?;
    let statements = build_session_statements(db_kind, &settings.db_settings);

    match db_kind {
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let connect_opts = SqliteConnectOptions::from_str(&url)
                .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
                .create_if_missing(true);

            let mut pool_opts = SqlitePoolOptions::new()
                .min_connections(settings.min_connections)
                .max_connections(settings.max_connections)
                .acquire_timeout(settings.acquire_timeout);
            if db_kind == DbKind::SqliteMemory {
                // Closing the only connection would drop the whole database.
                pool_opts = pool_opts.idle_timeout(None).max_lifetime(None);
            }

            let pool = pool_opts
                .after_connect(move |conn, _meta| {
                    let statements = statements.clone();
                    Box::pin(async move {
                        for stmt in &statements {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        trace!(hook = "after_connect", engine = "sqlite", "session configured");
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect_with(connect_opts)
                .await
                .map_err(|e| AppError::db_unavailable(format!("failed to open SQLite pool: {e}")))?;

            let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
            diagnostics::log_pragma_snapshot(&db, "runtime").await?;

            info!(
                engine = "sqlite",
                ?db_kind,
                min = settings.min_connections,
                max = settings.max_connections,
                acquire_timeout_ms = settings.acquire_timeout.as_millis() as u64,
                "pool created"
            );
            Ok(db)
        }
        DbKind::Postgres => {
            let pool = PgPoolOptions::new()
                .min_connections(settings.min_connections)
                .max_connections(settings.max_connections)
                .acquire_timeout(settings.acquire_timeout)
                .after_connect(move |conn, _meta| {
                    let statements = statements.clone();
                    Box::pin(async move {
                        for stmt in &statements {
                            sqlx::query(stmt).execute(&mut *conn).await?;
                        }
                        Ok::<_, sqlx::Error>(())
                    })
                })
                .connect(&url)
                .await
                .map_err(|e| AppError::db_unavailable(format!("failed to connect to Postgres: {e}")))?;

            info!(
                engine = "postgresql",
                min = settings.min_connections,
                max = settings.max_connections,
                acquire_timeout_ms = settings.acquire_timeout.as_millis() as u64,
                "pool created"
            );
            Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
        }
    }
}

/// Build the runtime pool *and* guarantee the schema is current.
///
/// In-memory SQLite migrates on the runtime pool itself, since every other
/// connection would be a different database. Other kinds migrate through a
/// single-connection owner pool first, then open the runtime pool.
pub async fn bootstrap_db(env: RuntimeEnv, db_kind: DbKind) -> Result<DatabaseConnection, AppError> {
    validate_db_config(env, db_kind)?;

    info!(
        ?env,
        ?db_kind,
        engine = engine(db_kind),
        pid = process::id(),
        "bootstrap start"
    );

    let settings = build_connection_settings(env, db_kind, PoolPurpose::Runtime)?;

    let pool = match db_kind {
        DbKind::SqliteMemory => {
            let pool = build_pool(env, db_kind, &settings).await?;
            orchestrate_migration_internal(&pool, env, db_kind, MigrationCommand::Up).await?;
            pool
        }
        DbKind::SqliteFile | DbKind::Postgres => {
            let admin_pool = build_admin_pool(env, db_kind).await?;
            orchestrate_migration_internal(&admin_pool, env, db_kind, MigrationCommand::Up)
                .await?;
            if let Err(e) = admin_pool.close().await {
                trace!(error = %e, "admin pool close failed");
            }
            build_pool(env, db_kind, &settings).await?
        }
    };

    if !diagnostics::foreign_keys_enabled(&pool).await? {
        return Err(AppError::config("SQLite foreign key enforcement is off"));
    }

    info!(?db_kind, "bootstrap ready");
    Ok(pool)
}
