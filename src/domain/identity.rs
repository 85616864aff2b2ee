//! Identity and timestamp generation.
//!
//! `generate_id` is what local mode uses: short, base-36, and only collision-resistant enough
//! for a few hundred records scoped to one profile. It is not cryptographically strong.

use chrono::{SecondsFormat, Utc};
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of identifiers produced by [`generate_id`].
pub const LOCAL_ID_LEN: usize = 9;

/// Returns a random base-36 identifier of [`LOCAL_ID_LEN`] characters.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..LOCAL_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Returns a 24-character hex identity for the document store.
///
/// Layout: 4-byte big-endian unix seconds followed by 8 random bytes.
pub fn generate_object_id() -> String {
    let secs = Utc::now().timestamp() as u32;
    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    rand::thread_rng().fill(&mut bytes[4..]);
    hex::encode(bytes)
}

/// Current UTC time as RFC 3339 with millisecond precision and a `Z` suffix.
///
/// Strings in this format order lexicographically the same way they order in time.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
