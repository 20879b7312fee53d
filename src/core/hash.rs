//! Password Digests
//!
//! Account passwords are stored as the lower-case hex SHA-512 of the raw
//! password bytes. There is no salt; the storage format is shared with
//! existing account tables.

use sha2::{Digest, Sha512};

/// Hex-encoded SHA-512 digest (128 characters).
pub type PasswordHash = String;

/// Hash a password into the stored representation.
pub fn hash_password(password: impl AsRef<[u8]>) -> PasswordHash {
    let mut hasher = Sha512::new();
    hasher.update(password.as_ref());
    hex::encode(hasher.finalize())
}

/// Compare a submitted password against a stored digest.
///
/// Stored digests are compared case-insensitively so upper-case hex rows
/// written by older tooling still match.
pub fn verify_password(password: impl AsRef<[u8]>, stored: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(stored.trim())
}
