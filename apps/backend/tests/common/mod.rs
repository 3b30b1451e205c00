#![allow(dead_code)]

// tests/common/mod.rs
use backend::db::txn_policy::{set_txn_policy, TxnPolicy};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}

// Policy defaults to rollback but can be flipped per-binary via `MONOPOLY_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    set_txn_policy(TxnPolicy::from_env(TxnPolicy::RollbackOnOk));
}
