//! Unique values for tests that share a database.

use ulid::Ulid;

/// `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("player");
/// assert_ne!(a, unique_str("player"));
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A display name that fits the 40-character column: the prefix is cut so the
/// ULID suffix always survives.
///
/// ```
/// use backend_test_support::unique_helpers::unique_display_name;
///
/// let name = unique_display_name("a-very-long-prefix-that-keeps-going");
/// assert!(name.len() <= 40);
/// ```
pub fn unique_display_name(prefix: &str) -> String {
    let ulid = Ulid::new().to_string();
    let keep = 40 - ulid.len() - 1;
    let prefix: String = prefix.chars().take(keep).collect();
    format!("{prefix}-{ulid}")
}

/// A seed that differs between calls, for deck shuffles in tests that do not
/// care about a specific order.
pub fn unique_seed() -> u64 {
    let ulid = Ulid::new();
    (ulid.random() as u64) ^ ulid.timestamp_ms()
}
