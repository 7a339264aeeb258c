//! # pwcore
//!
//! Password utility engine: generates passwords, passphrases and PINs under
//! user constraints, scores their strength, estimates crack time, analyses
//! character structure and computes a suite of digests.
//!
//! ## Features
//!
//! - Random passwords with class toggles, similar-character exclusion and a
//!   strict class-coverage guarantee
//! - Memorable passphrases from a built-in or custom dictionary
//! - Numeric PINs
//! - Structural analysis, 0-100 strength score with eight display bands
//! - Crack time estimate for an offline attacker
//! - MD5, SHA-1, SHA-224/256/384/512, Base64 and salted BCrypt
//!
//! All randomness comes from the operating system CSPRNG. Every operation is
//! a pure call over its inputs; nothing is retained between calls.
//!
//! ## Example
//!
//! ```
//! use pwcore::{generate_password, analyze, GenerationConfig, StrengthBand};
//!
//! let config = GenerationConfig { length: 16, symbols: true, ..Default::default() };
//! let password = generate_password(&config).unwrap();
//!
//! let result = analyze(&password);
//! assert_eq!(result.length, 16);
//! println!("{} ({})", StrengthBand::from_score(result.score).label(), result.crack_time);
//! ```

pub mod analysis;
pub mod config;
pub mod crypto;
pub mod engine;
pub mod error;
pub mod generator;
pub mod utils;

// Re-export main types
pub use error::{EngineError, Result};
pub use config::EngineConfig;
pub use engine::{analyze, crack_time, generate_passphrase, score, PasswordEngine, Strength};
pub use analysis::{AnalysisResult, BandColor, CommonPasswords, StrengthBand};
pub use generator::{
    generate_password, generate_pin, generate_words, GenerationConfig, PassphraseConfig, PinConfig,
    WordList,
};
pub use crypto::{
    base64_encode, bcrypt_hash, bcrypt_verify, md5_hex, sha1_hex, sha224_hex, sha256_hex,
    sha384_hex, sha512_hex,
};

/// Minimum random password length
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Maximum random password length
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Minimum passphrase word count
pub const PASSPHRASE_MIN_WORDS: usize = 3;

/// Maximum passphrase word count
pub const PASSPHRASE_MAX_WORDS: usize = 20;

/// Characters kept per word in short-form passphrases
pub const SHORT_WORD_LENGTH: usize = 4;

/// Minimum PIN length
pub const PIN_MIN_LENGTH: usize = 3;

/// Maximum PIN length
pub const PIN_MAX_LENGTH: usize = 12;

/// Lowest accepted BCrypt cost factor
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest accepted BCrypt cost factor
pub const BCRYPT_MAX_COST: u32 = 12;
