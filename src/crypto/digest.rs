//! Deterministic digests and encodings
//!
//! Each function takes the UTF-8 bytes of its input and returns lowercase
//! hex (or padded standard Base64). Uppercase rendering of a digest is left
//! to the caller.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// MD5 digest as 32 lowercase hex characters
///
/// # Example
///
/// ```
/// use pwcore::crypto::md5_hex;
///
/// assert_eq!(md5_hex("message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
/// ```
pub fn md5_hex(input: &str) -> String {
    use md5::{Digest, Md5};
    hex::encode(Md5::digest(input.as_bytes()))
}

/// SHA-1 digest as 40 lowercase hex characters
pub fn sha1_hex(input: &str) -> String {
    use sha1::{Digest, Sha1};
    hex::encode(Sha1::digest(input.as_bytes()))
}

/// SHA-224 digest as 56 lowercase hex characters
pub fn sha224_hex(input: &str) -> String {
    use sha2::{Digest, Sha224};
    hex::encode(Sha224::digest(input.as_bytes()))
}

/// SHA-256 digest as 64 lowercase hex characters
pub fn sha256_hex(input: &str) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// SHA-384 digest as 96 lowercase hex characters
pub fn sha384_hex(input: &str) -> String {
    use sha2::{Digest, Sha384};
    hex::encode(Sha384::digest(input.as_bytes()))
}

/// SHA-512 digest as 128 lowercase hex characters
pub fn sha512_hex(input: &str) -> String {
    use sha2::{Digest, Sha512};
    hex::encode(Sha512::digest(input.as_bytes()))
}

/// Standard-alphabet, padded Base64 of the input bytes
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}
