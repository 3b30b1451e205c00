//! Database configuration lives in `db-infra` so the migration CLI resolves
//! the same URLs; re-exported here for backend callers.

pub use db_infra::db::{
    build_connection_settings, build_session_statements, make_conn_spec, validate_db_config,
    ConnectionSettings, DbKind, DbOwner, DbSettings, PoolPurpose, RuntimeEnv,
};
