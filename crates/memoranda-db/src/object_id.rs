//! Note identifier generation.
//!
//! Identifiers are opaque 24-character lowercase hex strings: a 4-byte
//! big-endian unix timestamp followed by 8 random bytes. The timestamp
//! prefix keeps freshly minted ids roughly chronological; the random tail
//! makes reuse implausible. The storage layer additionally enforces
//! uniqueness through the primary key.

use chrono::Utc;
use rand::RngCore;

/// Generate a new 24-hex-character note identifier.
pub fn generate() -> String {
    let mut bytes = [0u8; 12];
    let seconds = Utc::now().timestamp().max(0) as u32;
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    rand::thread_rng().fill_bytes(&mut bytes[4..]);
    hex::encode(bytes)
}
