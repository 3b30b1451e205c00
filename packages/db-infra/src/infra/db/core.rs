use std::future::Future;
use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use rand::Rng;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, trace, warn};

use crate::config::db::{
    build_connection_settings, build_session_statements, make_conn_spec, sqlite_lock_path,
    validate_db_config, DbKind, DbOwner, DbSettings, PoolPurpose, RuntimeEnv,
};
use crate::error::DbInfraError;
use crate::infra::db::locking::{BootstrapLock, Guard, InMemoryLock, PgAdvisoryLock, SqliteFileLock};

const MIGRATION_BODY_TIMEOUT: Duration = Duration::from_secs(120);

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection retry succeeded");
                }
                return Ok(conn);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(attempt, max_attempts, interval_ms, error = %e, "connection attempt failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Single-connection pool with owner credentials, used for DDL and migration locks.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, DbOwner::Owner)?;

    let mut opt = ConnectOptions::new(&url);
    opt.min_connections(1)
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    let connect = || {
        let opt = opt.clone();
        async move {
            Database::connect(opt)
                .await
                .map_err(|e| DbInfraError::connect(format!("admin pool: {e}")))
        }
    };

    // Postgres may still be starting next to us; files and memory are immediate.
    if matches!(db_kind, DbKind::Postgres) {
        retry_connection(connect, 5, 500).await
    } else {
        connect().await
    }
}

/// Masks the password in a connection URL for logging and lock keys.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth, host)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    match auth.rfind(':') {
        // `scheme://user:pass`; the scheme colon is followed by "//"
        Some(pos) if !auth[pos + 1..].starts_with("//") => {
            format!("{}:***@{}", &auth[..pos], host)
        }
        _ => url.to_string(),
    }
}

/// True when the applied migrations already match the migrator's list.
async fn fast_path_schema_check(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let defined = Migrator::migrations();
    let expected_count = defined.len();
    let expected_last = defined.last().map(|m| m.name().to_string());

    let applied = match Migrator::get_applied_migrations(conn).await {
        Ok(applied) => applied,
        Err(DbErr::Exec(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::migration(format!(
                "failed to read applied migrations: {e}"
            )))
        }
    };

    let current_last = applied.last().map(|m| m.name().to_string());
    let up_to_date = applied.len() == expected_count && current_last == expected_last;

    trace!(
        fastpath = if up_to_date { "hit" } else { "miss" },
        applied_count = applied.len(),
        expected_count,
        current_last = current_last.as_deref().unwrap_or(""),
        expected_last = expected_last.as_deref().unwrap_or("")
    );

    Ok(up_to_date)
}

/// Connects with owner credentials and runs `command` under the bootstrap lock.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    validate_db_config(env, db_kind)?;
    let admin_pool = build_admin_pool(env, db_kind).await?;
    orchestrate_migration_internal(&admin_pool, env, db_kind, command).await
}

/// Same as [`orchestrate_migration`] on an existing pool.
///
/// In-memory SQLite must go through here with the runtime pool, since a
/// fresh admin pool would be a different database.
pub async fn orchestrate_migration_internal(
    pool: &DatabaseConnection,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    info!(?env, ?db_kind, ?command, "migrate start");

    if matches!(command, MigrationCommand::Status) {
        migrate(pool, command)
            .await
            .map_err(|e| DbInfraError::migration(e.to_string()))?;
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let result = match db_kind {
        DbKind::Postgres => {
            let url = make_conn_spec(env, db_kind, DbOwner::Owner)?;
            let key = format!("monopoly:migrate:{:?}:{}", db_kind, sanitize_db_url(&url));
            let lock = PgAdvisoryLock::new(pool.clone(), &key);
            migrate_with_lock(pool, lock, env, db_kind, command, cancel).await
        }
        DbKind::SqliteFile => {
            let lock = SqliteFileLock::new(&sqlite_lock_path(db_kind, env)?);
            migrate_with_lock(pool, lock, env, db_kind, command, cancel).await
        }
        DbKind::SqliteMemory => {
            migrate_with_lock(pool, InMemoryLock, env, db_kind, command, cancel).await
        }
    };

    match &result {
        Ok(()) => info!(?command, "migrate done"),
        Err(e) if e.is_sqlite_busy() => error!(error = %e, "sqlite busy during migrate"),
        Err(e) => error!(error = %e, "migrate failed"),
    }

    result
}

fn lock_acquire_timeout(env: RuntimeEnv) -> Duration {
    let ms = std::env::var("MONOPOLY_MIGRATE_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(match env {
            RuntimeEnv::Test => 3_000,
            RuntimeEnv::Prod => 900,
        });
    Duration::from_millis(ms)
}

/// Exponential backoff capped at 80ms plus a little jitter.
fn backoff_delay(attempts: u32) -> Duration {
    let base_ms = (5u64 << attempts.saturating_sub(1).min(8)).min(80);
    let jitter_ms = rand::rng().random_range(0..4);
    Duration::from_millis(base_ms + jitter_ms)
}

async fn migrate_with_lock<L>(
    pool: &DatabaseConnection,
    mut lock: L,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
    cancel: CancellationToken,
) -> Result<(), DbInfraError>
where
    L: BootstrapLock,
{
    let settings = build_connection_settings(env, db_kind, PoolPurpose::Migration)?;
    let acquire_timeout = lock_acquire_timeout(env);
    let start = Instant::now();
    let mut attempts: u32 = 0;

    let guard = loop {
        attempts += 1;

        // Another process may have finished while we waited.
        if matches!(command, MigrationCommand::Up) && fast_path_schema_check(pool).await? {
            info!(attempts, "migrate skipped, schema up to date");
            return Ok(());
        }

        if let Some(guard) = lock.try_acquire().await? {
            trace!(lock = "won", attempts, elapsed_ms = start.elapsed().as_millis() as u64);
            break guard;
        }

        let delay = backoff_delay(attempts);
        trace!(lock = "backoff", attempts, delay_ms = delay.as_millis() as u64);

        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                if start.elapsed() >= acquire_timeout {
                    return Err(DbInfraError::lock(format!(
                        "migration lock not acquired after {:?} ({attempts} attempts)",
                        start.elapsed()
                    )));
                }
            }
            _ = cancel.cancelled() => {
                return Err(DbInfraError::lock("migration cancelled while waiting for lock"));
            }
        }
    };

    let outcome = run_locked(pool, env, db_kind, command, cancel, &settings.db_settings).await;

    release_quietly(guard).await;
    outcome
}

async fn release_quietly(guard: Guard) {
    if let Err(e) = guard.release().await {
        warn!(error = %e, "failed to release migration lock");
    }
}

async fn run_locked(
    pool: &DatabaseConnection,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
    cancel: CancellationToken,
    db_settings: &DbSettings,
) -> Result<(), DbInfraError> {
    let start = Instant::now();

    if matches!(db_kind, DbKind::SqliteFile) {
        setup_sqlite_file_prerequisites(pool).await?;
    }
    apply_db_settings(pool, db_settings, db_kind).await?;

    let task_pool = pool.clone();
    let mut task = tokio::spawn(async move { migrate(&task_pool, command).await });

    tokio::select! {
        biased;

        joined = &mut task => match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(DbInfraError::migration(e.to_string())),
            Err(join_err) if join_err.is_panic() => {
                return Err(DbInfraError::migration("migration task panicked"));
            }
            Err(_) => return Err(DbInfraError::migration("migration task aborted")),
        },
        _ = tokio::time::sleep(MIGRATION_BODY_TIMEOUT) => {
            task.abort();
            let _ = task.await;
            return Err(DbInfraError::migration(format!(
                "migration timed out after {}ms",
                MIGRATION_BODY_TIMEOUT.as_millis()
            )));
        }
        _ = cancel.cancelled() => {
            task.abort();
            let _ = task.await;
            return Err(DbInfraError::migration("migration cancelled"));
        }
    }

    let expected = Migrator::migrations().len();
    let applied = Migrator::get_applied_migrations(pool)
        .await
        .map(|m| m.len())
        .unwrap_or(0);
    info!(?env, ?db_kind, expected, applied, elapsed_ms = start.elapsed().as_millis() as u64, "migrator ran");

    match command {
        MigrationCommand::Reset if applied != 0 => Err(DbInfraError::migration(format!(
            "reset left {applied} migration(s) applied"
        ))),
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh
            if applied != expected =>
        {
            Err(DbInfraError::migration(format!(
                "expected {expected} applied migration(s), found {applied}"
            )))
        }
        _ => Ok(()),
    }
}

async fn apply_db_settings(
    pool: &DatabaseConnection,
    settings: &DbSettings,
    db_kind: DbKind,
) -> Result<(), DbInfraError> {
    let backend = DatabaseBackend::from(db_kind);
    for stmt in build_session_statements(db_kind, settings) {
        pool.execute(Statement::from_string(backend, stmt))
            .await
            .map_err(|e| DbInfraError::config(format!("failed to apply session settings: {e}")))?;
    }
    Ok(())
}

async fn setup_sqlite_file_prerequisites(pool: &DatabaseConnection) -> Result<(), DbInfraError> {
    for pragma in ["PRAGMA journal_mode = WAL;", "PRAGMA synchronous = NORMAL;"] {
        pool.execute(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .await
            .map_err(|e| DbInfraError::config(format!("{pragma} failed: {e}")))?;
    }
    Ok(())
}
