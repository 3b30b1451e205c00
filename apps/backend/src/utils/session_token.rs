//! Session secrets and their stored digests.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::TryRngCore;

const TOKEN_BYTES: usize = 32;

/// Fresh 256-bit secret, URL-safe base64 without padding.
/// Handed to the client once and never stored.
pub fn generate_session_token() -> Result<String, rand::rand_core::OsError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Digest persisted in `player_sessions.token_hash`.
pub fn hash_session_token(token: &str) -> String {
    blake3::hash(token.as_bytes()).to_hex().to_string()
}
