use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for redaction, compiled once.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Postgres constraint detail: `Key (token_hash)=(abc...)`
    pub fn key_detail() -> &'static Regex {
        static KEY_DETAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"Key \(([^)]*)\)=\(([^)]*)\)").unwrap()
        });
        &KEY_DETAIL_REGEX
    }

    /// Base64/base32-like token pattern (≥16 chars)
    pub fn opaque_token() -> &'static Regex {
        static OPAQUE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}").unwrap()
        });
        &OPAQUE_TOKEN_REGEX
    }

    /// Hex digest pattern (≥16 chars), e.g. session token hashes
    pub fn hex_token() -> &'static Regex {
        static HEX_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
        });
        &HEX_TOKEN_REGEX
    }
}

/// Redacts values that may identify a player session.
///
/// - Postgres key details keep the column list and drop the values
/// - Opaque tokens and hex digests (≥16 chars) become `[REDACTED_TOKEN]`
pub fn redact(input: &str) -> String {
    let keys = PiiRegexRegistry::key_detail().replace_all(input, "Key ($1)=([REDACTED])");
    let hex = PiiRegexRegistry::hex_token().replace_all(&keys, "[REDACTED_TOKEN]");
    PiiRegexRegistry::opaque_token()
        .replace_all(&hex, |caps: &regex::Captures| {
            let m = &caps[0];
            // snake_case identifiers (table and column names) are not secrets
            if m.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
                m.to_string()
            } else {
                "[REDACTED_TOKEN]".to_string()
            }
        })
        .to_string()
}

/// Wrapper that redacts when formatted, for use in tracing fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
