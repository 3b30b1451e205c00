//! Room codes: short, human-typeable lobby identifiers.
//!
//! Codes are 6 characters from Crockford's Base32 alphabet, which leaves out
//! I, L, O and U so a code read aloud cannot be mistyped as a digit.

use rand::Rng;

pub const ROOM_CODE_LEN: usize = 6;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Random room code. Uniqueness is enforced by `ux_rooms_code`; callers retry on collision.
pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}

/// Uppercases user input and folds the Crockford look-alikes (`O`→`0`, `I`/`L`→`1`).
/// Returns `None` if the result is not a well-formed code.
pub fn normalize_room_code(input: &str) -> Option<String> {
    let code: String = input
        .trim()
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'O' => '0',
            'I' | 'L' => '1',
            other => other,
        })
        .collect();

    let well_formed =
        code.len() == ROOM_CODE_LEN && code.bytes().all(|b| CROCKFORD.contains(&b));
    well_formed.then_some(code)
}
