pub mod core;
pub mod locking;

pub use core::{build_admin_pool, orchestrate_migration, orchestrate_migration_internal, sanitize_db_url};
pub use locking::{BootstrapLock, Guard, InMemoryLock, PgAdvisoryLock, SqliteFileLock};
