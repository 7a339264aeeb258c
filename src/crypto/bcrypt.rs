//! BCrypt password hashing
//!
//! The salt is drawn from the OS random source on every call, so two hashes
//! of the same input differ while both verify.

use bcrypt::Version;
use log::debug;

use crate::crypto::random::fill_secure;
use crate::error::{EngineError, Result};
use crate::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};

const SALT_LENGTH: usize = 16;

/// Reject cost factors outside the supported range
pub fn validate_cost(rounds: u32) -> Result<()> {
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&rounds) {
        return Err(EngineError::ConfigError(format!(
            "bcrypt rounds {} outside [{}, {}]",
            rounds, BCRYPT_MIN_COST, BCRYPT_MAX_COST
        )));
    }
    Ok(())
}

/// Hash `input` with BCrypt at the given cost.
///
/// Output uses the `$2b$` modular crypt format: version, two-digit cost,
/// then 22 characters of salt and 31 of hash.
///
/// # Example
/// ```
/// use pwcore::crypto::{bcrypt_hash, bcrypt_verify};
///
/// let hash = bcrypt_hash("abc", 4).unwrap();
/// assert!(hash.starts_with("$2b$04$"));
/// assert!(bcrypt_verify("abc", &hash).unwrap());
/// ```
pub fn bcrypt_hash(input: &str, rounds: u32) -> Result<String> {
    validate_cost(rounds)?;

    let mut salt = [0u8; SALT_LENGTH];
    fill_secure(&mut salt)?;

    debug!("bcrypt hashing with cost {}", rounds);
    let parts = bcrypt::hash_with_salt(input.as_bytes(), rounds, salt)?;
    Ok(parts.format_for_version(Version::TwoB))
}

/// Check `input` against an encoded BCrypt hash
pub fn bcrypt_verify(input: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(input.as_bytes(), hash)?)
}
