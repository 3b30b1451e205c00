use std::sync::OnceLock;

/// Whether a successful `with_txn` commits or rolls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit the transaction when the operation succeeds (default behavior)
    CommitOnOk,
    /// Rollback the transaction when the operation succeeds (for testing)
    RollbackOnOk,
}

impl TxnPolicy {
    /// Reads `MONOPOLY_TXN_POLICY` (`commit` or `rollback`); anything else yields `default`.
    pub fn from_env(default: TxnPolicy) -> TxnPolicy {
        match std::env::var("MONOPOLY_TXN_POLICY")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "commit" => TxnPolicy::CommitOnOk,
            "rollback" => TxnPolicy::RollbackOnOk,
            _ => default,
        }
    }
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Current policy; `CommitOnOk` until something sets it.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// Set the policy for the process. Only the first call has any effect.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}
