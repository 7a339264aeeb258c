//! Numeric PIN generation

use log::debug;
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::crypto::random::{pick, secure_rng};
use crate::error::{EngineError, Result};
use crate::generator::charset::DIGITS;
use crate::{PIN_MAX_LENGTH, PIN_MIN_LENGTH};

/// Options for PIN generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PinConfig {
    /// Number of digits, 3 to 12
    pub length: usize,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self { length: 6 }
    }
}

impl PinConfig {
    pub fn validate(&self) -> Result<()> {
        if !(PIN_MIN_LENGTH..=PIN_MAX_LENGTH).contains(&self.length) {
            return Err(EngineError::ConfigError(format!(
                "PIN length {} outside [{}, {}]",
                self.length, PIN_MIN_LENGTH, PIN_MAX_LENGTH
            )));
        }
        Ok(())
    }
}

/// Generate a PIN of `length` digits; leading zeros are kept
pub fn generate_pin(length: usize) -> Result<String> {
    generate_pin_with(&PinConfig { length }, &mut secure_rng())
}

pub fn generate_pin_with<R: CryptoRng + ?Sized>(config: &PinConfig, rng: &mut R) -> Result<String> {
    config.validate()?;
    debug!("generating PIN of length {}", config.length);

    let digits: Vec<char> = DIGITS.chars().collect();
    Ok((0..config.length).map(|_| pick(rng, &digits)).collect())
}
