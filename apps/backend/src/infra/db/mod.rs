//! Database infrastructure - pool construction, bootstrap, and diagnostics.

pub mod core;
pub mod diagnostics;

pub use core::{bootstrap_db, build_pool};

pub use crate::config::db::{DbKind, DbOwner, RuntimeEnv};
