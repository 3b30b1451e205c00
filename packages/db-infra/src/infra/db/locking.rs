use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::{debug, warn};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::DbInfraError;

/// Advisory lock id for a textual key.
pub fn pg_lock_id(key: &str) -> i64 {
    xxh3_64(key.as_bytes()) as i64
}

enum Held {
    Postgres { pool: DatabaseConnection, key: i64 },
    SqliteFile { file: File, path: PathBuf },
    Noop,
}

/// A held migration lock. Call [`Guard::release`] when done; dropping a
/// SQLite guard also releases the OS lock when the file handle closes.
pub struct Guard {
    held: Option<Held>,
}

impl Guard {
    fn new(held: Held) -> Self {
        Self { held: Some(held) }
    }

    pub async fn release(mut self) -> Result<(), DbInfraError> {
        let Some(held) = self.held.take() else {
            return Ok(());
        };

        match held {
            Held::Noop => Ok(()),
            Held::SqliteFile { file, path } => {
                if let Err(e) = fs4::fs_std::FileExt::unlock(&file) {
                    debug!(error = %e, lock_path = %path.display(), "sqlite file unlock returned error");
                } else {
                    debug!(lock_path = %path.display(), "sqlite file lock released");
                }
                Ok(())
            }
            Held::Postgres { pool, key } => {
                let stmt = Statement::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    "SELECT pg_advisory_unlock($1) AS unlocked",
                    vec![key.into()],
                );
                match pool.query_one(stmt).await {
                    Ok(Some(row)) => {
                        let unlocked: bool = row
                            .try_get("", "unlocked")
                            .map_err(|e| DbInfraError::lock(format!("failed to read unlock result: {e}")))?;
                        if !unlocked {
                            warn!(lock_key = key, "advisory unlock returned false");
                        }
                    }
                    Ok(None) => warn!(lock_key = key, "advisory unlock returned no row"),
                    Err(e) => warn!(error = %e, lock_key = key, "advisory unlock failed"),
                }
                Ok(())
            }
        }
    }
}

/// Non-blocking lock used to serialize migrations across processes.
#[async_trait]
pub trait BootstrapLock {
    /// `Ok(None)` means another holder has it; the caller backs off and retries.
    async fn try_acquire(&mut self) -> Result<Option<Guard>, DbInfraError>;
}

/// Session-level advisory lock.
///
/// The admin pool must be min=max=1 so unlock runs on the session that locked.
pub struct PgAdvisoryLock {
    admin_pool: DatabaseConnection,
    lock_key: i64,
}

impl PgAdvisoryLock {
    pub fn new(admin_pool: DatabaseConnection, key: &str) -> Self {
        Self {
            admin_pool,
            lock_key: pg_lock_id(key),
        }
    }
}

#[async_trait]
impl BootstrapLock for PgAdvisoryLock {
    async fn try_acquire(&mut self) -> Result<Option<Guard>, DbInfraError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT pg_try_advisory_lock($1) AS locked",
            vec![self.lock_key.into()],
        );

        let row = self
            .admin_pool
            .query_one(stmt)
            .await
            .map_err(|e| DbInfraError::lock(format!("failed to acquire advisory lock: {e}")))?
            .ok_or_else(|| DbInfraError::lock("pg_try_advisory_lock returned no row"))?;

        let locked: bool = row
            .try_get("", "locked")
            .map_err(|e| DbInfraError::lock(format!("failed to read lock result: {e}")))?;

        Ok(locked.then(|| {
            Guard::new(Held::Postgres {
                pool: self.admin_pool.clone(),
                key: self.lock_key,
            })
        }))
    }
}

/// Exclusive OS lock on `<db>.migrate.lock`.
pub struct SqliteFileLock {
    lock_path: PathBuf,
}

impl SqliteFileLock {
    pub fn new(lock_path: &Path) -> Self {
        Self {
            lock_path: lock_path.to_path_buf(),
        }
    }
}

#[async_trait]
impl BootstrapLock for SqliteFileLock {
    async fn try_acquire(&mut self) -> Result<Option<Guard>, DbInfraError> {
        use fs4::fs_std::FileExt;

        if let Some(parent) = self.lock_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DbInfraError::lock(format!("failed to create lock directory: {e}")))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&self.lock_path)
            .map_err(|e| DbInfraError::lock(format!("failed to open lock file: {e}")))?;

        match file.try_lock_exclusive() {
            Ok(true) => {
                debug!(lock_path = %self.lock_path.display(), "sqlite file lock acquired");
                Ok(Some(Guard::new(Held::SqliteFile {
                    file,
                    path: self.lock_path.clone(),
                })))
            }
            Ok(false) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(DbInfraError::lock(format!(
                "failed to acquire sqlite file lock: {e}"
            ))),
        }
    }
}

/// In-memory databases are private to one pool, so there is nothing to contend for.
pub struct InMemoryLock;

#[async_trait]
impl BootstrapLock for InMemoryLock {
    async fn try_acquire(&mut self) -> Result<Option<Guard>, DbInfraError> {
        Ok(Some(Guard::new(Held::Noop)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_id_is_stable_per_key() {
        assert_eq!(pg_lock_id("monopoly:migrate:a"), pg_lock_id("monopoly:migrate:a"));
        assert_ne!(pg_lock_id("monopoly:migrate:a"), pg_lock_id("monopoly:migrate:b"));
    }

    #[tokio::test]
    async fn sqlite_file_lock_is_exclusive_until_released() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite.migrate.lock");

        let mut first = SqliteFileLock::new(&path);
        let mut second = SqliteFileLock::new(&path);

        let guard = first.try_acquire().await.unwrap().expect("first acquire");
        assert!(second.try_acquire().await.unwrap().is_none());

        guard.release().await.unwrap();
        let again = second.try_acquire().await.unwrap();
        assert!(again.is_some());
    }

    #[tokio::test]
    async fn in_memory_lock_always_acquires() {
        let mut lock = InMemoryLock;
        let a = lock.try_acquire().await.unwrap();
        let b = lock.try_acquire().await.unwrap();
        assert!(a.is_some() && b.is_some());
    }
}
