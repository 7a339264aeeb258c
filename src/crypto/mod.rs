//! Cryptographic primitives
//!
//! The secure random source shared by all generators, the deterministic
//! digest suite (MD5, SHA-1, SHA-2 family, Base64) and salted BCrypt.

pub mod random;
mod digest;
mod bcrypt;

pub use random::{secure_rng, fill_secure, SecureRng};
pub use digest::{md5_hex, sha1_hex, sha224_hex, sha256_hex, sha384_hex, sha512_hex, base64_encode};
pub use self::bcrypt::{bcrypt_hash, bcrypt_verify};
