//! Secure random source
//!
//! Every generator in this crate is generic over [`rand::CryptoRng`], so a
//! general-purpose PRNG cannot be passed in by mistake. The public entry
//! points draw from the operating system generator.

use rand::rand_core::UnwrapErr;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, TryRngCore};

use crate::error::{EngineError, Result};

/// Operating system CSPRNG adapted to the infallible `RngCore` interface.
///
/// An entropy failure from the OS panics inside the adapter; operations that
/// must report it instead use [`fill_secure`].
pub type SecureRng = UnwrapErr<OsRng>;

/// Create the secure random source used by the public entry points
pub fn secure_rng() -> SecureRng {
    OsRng.unwrap_err()
}

/// Fill `buf` from the operating system CSPRNG, reporting failure as an error
pub fn fill_secure(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| EngineError::GenerationError(format!("OS random source failed: {}", e)))
}

/// Pick one character uniformly from `pool`.
///
/// `pool` must not be empty; callers validate their alphabets first.
pub fn pick<R: CryptoRng + ?Sized>(rng: &mut R, pool: &[char]) -> char {
    pool[rng.random_range(0..pool.len())]
}
