use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use sea_orm::DatabaseBackend;

use crate::error::DbInfraError;

/// Which database a process talks to. `Test` enforces the `_test` naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

impl FromStr for RuntimeEnv {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(RuntimeEnv::Prod),
            "test" => Ok(RuntimeEnv::Test),
            other => Err(DbInfraError::config(format!(
                "unknown runtime env '{other}' (expected prod|test)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    /// Reads a `DbKind` from `var`, falling back to `default` when unset.
    pub fn from_env(var: &str, default: DbKind) -> Result<Self, DbInfraError> {
        match env::var(var) {
            Ok(raw) if !raw.trim().is_empty() => raw.parse(),
            _ => Ok(default),
        }
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

impl FromStr for DbKind {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbKind::Postgres),
            "sqlite" | "sqlite-file" | "file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" | "mem" => Ok(DbKind::SqliteMemory),
            other => Err(DbInfraError::config(format!(
                "unknown db kind '{other}' (expected postgres|sqlite-file|sqlite-memory)"
            ))),
        }
    }
}

impl From<DbKind> for DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => DatabaseBackend::Sqlite,
        }
    }
}

/// Credentials to connect with: the app role for runtime traffic, the owner role for DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    App,
    Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolPurpose {
    Runtime,
    Migration,
}

/// Per-session settings applied on every new connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub application_name: String,
    pub busy_timeout_ms: u64,
    pub statement_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub db_settings: DbSettings,
}

/// Builds the connection URL for `(env, kind, owner)` from environment variables.
///
/// Postgres reads `POSTGRES_HOST`, `POSTGRES_PORT`, `PROD_DB`/`TEST_DB` and the
/// credentials for `owner`. SQLite files live under `SQLITE_DB_DIR`.
pub fn make_conn_spec(env: RuntimeEnv, kind: DbKind, owner: DbOwner) -> Result<String, DbInfraError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = pg_db_name(env)?;
            let (user, password) = credentials(owner)?;
            let password = utf8_percent_encode(&password, NON_ALPHANUMERIC);
            Ok(format!("postgresql://{user}:{password}@{host}:{port}/{db_name}"))
        }
        DbKind::SqliteFile => {
            let path = sqlite_file_spec(env)?;
            Ok(format!("sqlite://{}?mode=rwc", path.display()))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Checks that everything `make_conn_spec` needs is present before any connection attempt.
pub fn validate_db_config(env: RuntimeEnv, kind: DbKind) -> Result<(), DbInfraError> {
    match kind {
        DbKind::Postgres => {
            pg_db_name(env)?;
            credentials(DbOwner::App)?;
            credentials(DbOwner::Owner)?;
            Ok(())
        }
        DbKind::SqliteFile => sqlite_file_spec(env).map(|_| ()),
        DbKind::SqliteMemory => Ok(()),
    }
}

/// Path of the SQLite database file for `env`.
pub fn sqlite_file_spec(env: RuntimeEnv) -> Result<PathBuf, DbInfraError> {
    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "./data/sqlite".to_string());
    if dir.trim().is_empty() {
        return Err(DbInfraError::config("SQLITE_DB_DIR is set but empty"));
    }
    let file = match env {
        RuntimeEnv::Prod => "monopoly.db",
        RuntimeEnv::Test => "monopoly_test.db",
    };
    Ok(PathBuf::from(dir).join(file))
}

/// Lock file guarding migrations of a SQLite file database.
/// Every process must resolve the same path for the lock to mean anything.
pub fn sqlite_lock_path(kind: DbKind, env: RuntimeEnv) -> Result<PathBuf, DbInfraError> {
    match kind {
        DbKind::SqliteFile => {
            let db_path = sqlite_file_spec(env)?;
            let mut name = db_path
                .file_name()
                .map(|n| n.to_os_string())
                .ok_or_else(|| DbInfraError::config("sqlite db path has no file name"))?;
            name.push(".migrate.lock");
            Ok(db_path.with_file_name(name))
        }
        other => Err(DbInfraError::config(format!(
            "lock file requested for non-file database kind {other:?}"
        ))),
    }
}

pub fn build_connection_settings(
    env: RuntimeEnv,
    kind: DbKind,
    purpose: PoolPurpose,
) -> Result<ConnectionSettings, DbInfraError> {
    let cpus = num_cpus::get() as u32;

    let (min_connections, max_connections) = match (kind, purpose) {
        // Every connection to `sqlite::memory:` is its own database.
        (DbKind::SqliteMemory, _) => (1, 1),
        (_, PoolPurpose::Migration) => (1, 1),
        (DbKind::SqliteFile, PoolPurpose::Runtime) => (1, cpus.clamp(2, 4)),
        (DbKind::Postgres, PoolPurpose::Runtime) => match env {
            RuntimeEnv::Prod => (2, (cpus * 2).clamp(4, 32)),
            RuntimeEnv::Test => (1, 4),
        },
    };

    let acquire_timeout = match env {
        RuntimeEnv::Prod => Duration::from_secs(5),
        RuntimeEnv::Test => Duration::from_secs(2),
    };

    let application_name = match purpose {
        PoolPurpose::Runtime => "monopoly-backend",
        PoolPurpose::Migration => "monopoly-migrate",
    };

    Ok(ConnectionSettings {
        min_connections,
        max_connections,
        acquire_timeout,
        db_settings: DbSettings {
            application_name: application_name.to_string(),
            busy_timeout_ms: 5_000,
            statement_timeout_ms: match purpose {
                PoolPurpose::Runtime => 15_000,
                PoolPurpose::Migration => 120_000,
            },
        },
    })
}

/// SQL executed once per new session so every pooled connection behaves the same.
pub fn build_session_statements(kind: DbKind, settings: &DbSettings) -> Vec<String> {
    match kind {
        DbKind::Postgres => vec![
            format!("SET application_name = '{}'", settings.application_name),
            "SET TIME ZONE 'UTC'".to_string(),
            format!("SET statement_timeout = {}", settings.statement_timeout_ms),
        ],
        DbKind::SqliteFile | DbKind::SqliteMemory => vec![
            "PRAGMA foreign_keys = ON;".to_string(),
            format!("PRAGMA busy_timeout = {};", settings.busy_timeout_ms),
        ],
    }
}

fn pg_db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let name = must_var("TEST_DB")?;
            if !name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{name}'"
                )));
            }
            Ok(name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("MONOPOLY_OWNER_USER")?,
            must_var("MONOPOLY_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}
