//! Random password generation
//!
//! Draws every character uniformly from the union of the enabled classes.
//! Strict mode then repairs the draw until every enabled class is present.

use log::{debug, error, warn};
use rand::{CryptoRng, Rng};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::crypto::random::{pick, secure_rng};
use crate::error::{EngineError, Result};
use crate::generator::charset::CharClass;
use crate::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

/// Upper bound on strict-mode repair rounds
const MAX_REPAIR_ATTEMPTS: usize = 64;

/// Options for random password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    /// Password length, 4 to 128
    pub length: usize,
    /// Include ASCII punctuation
    pub symbols: bool,
    /// Include digits (0-9)
    pub numbers: bool,
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include the space character
    pub spaces: bool,
    /// Drop visually ambiguous characters from every class
    pub exclude_similar_characters: bool,
    /// Require at least one character from every enabled class
    pub strict: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 20,
            symbols: false,
            numbers: true,
            uppercase: true,
            lowercase: true,
            spaces: false,
            exclude_similar_characters: false,
            strict: true,
        }
    }
}

impl GenerationConfig {
    /// Enabled classes in a fixed order
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| match class {
                CharClass::Lowercase => self.lowercase,
                CharClass::Uppercase => self.uppercase,
                CharClass::Digit => self.numbers,
                CharClass::Symbol => self.symbols,
                CharClass::Space => self.spaces,
            })
            .collect()
    }

    /// Check bounds and class selection without touching the random source
    pub fn validate(&self) -> Result<()> {
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&self.length) {
            return Err(EngineError::ConfigError(format!(
                "password length {} outside [{}, {}]",
                self.length, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            )));
        }

        let enabled = self.enabled_classes().len();
        if enabled == 0 {
            return Err(EngineError::ConfigError(
                "at least one character class must be enabled".to_string(),
            ));
        }

        if self.strict && self.length < enabled {
            return Err(EngineError::ConfigError(format!(
                "strict mode needs length >= {} for the enabled classes, got {}",
                enabled, self.length
            )));
        }

        Ok(())
    }
}

/// Generate a password from the OS random source.
///
/// # Example
/// ```
/// use pwcore::generator::{generate_password, GenerationConfig};
///
/// let config = GenerationConfig {
///     length: 12,
///     symbols: false,
///     ..Default::default()
/// };
/// let password = generate_password(&config).unwrap();
/// assert_eq!(password.chars().count(), 12);
/// ```
pub fn generate_password(config: &GenerationConfig) -> Result<String> {
    generate_password_with(config, &mut secure_rng())
}

/// Generate a password from the given cryptographic random source
pub fn generate_password_with<R: CryptoRng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String> {
    config.validate()?;

    let classes = config.enabled_classes();
    debug!(
        "generating password: length={}, classes={:?}, exclude_similar={}, strict={}",
        config.length, classes, config.exclude_similar_characters, config.strict
    );

    let pools: Vec<(CharClass, Vec<char>)> = classes
        .iter()
        .map(|class| (*class, class.pool(config.exclude_similar_characters)))
        .collect();
    let alphabet: Vec<char> = pools.iter().flat_map(|(_, pool)| pool.iter().copied()).collect();

    let mut password: Vec<char> = (0..config.length).map(|_| pick(rng, &alphabet)).collect();

    if config.strict {
        repair_coverage(&mut password, &pools, rng)?;
    }

    Ok(password.into_iter().collect())
}

/// Count characters per enabled class, in the order of `pools`
fn class_counts(password: &[char], pools: &[(CharClass, Vec<char>)]) -> Vec<usize> {
    pools
        .iter()
        .map(|(class, _)| {
            password
                .iter()
                .filter(|c| CharClass::of(**c) == Some(*class))
                .count()
        })
        .collect()
}

/// Replace surplus characters with ones from missing classes, then reshuffle.
///
/// Only positions whose class occurs more than once are overwritten, so a
/// repair never removes the last representative of another class.
fn repair_coverage<R: CryptoRng + ?Sized>(
    password: &mut [char],
    pools: &[(CharClass, Vec<char>)],
    rng: &mut R,
) -> Result<()> {
    let mut repaired = false;

    for _ in 0..MAX_REPAIR_ATTEMPTS {
        let counts = class_counts(password, pools);
        let Some(missing) = counts.iter().position(|count| *count == 0) else {
            if repaired {
                warn!("strict mode repaired class coverage");
                password.shuffle(rng);
            }
            return Ok(());
        };

        let surplus: Vec<usize> = password
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                pools
                    .iter()
                    .position(|(class, _)| CharClass::of(**c) == Some(*class))
                    .is_some_and(|idx| counts[idx] > 1)
            })
            .map(|(i, _)| i)
            .collect();

        if surplus.is_empty() {
            break;
        }

        let target = surplus[rng.random_range(0..surplus.len())];
        password[target] = pick(rng, &pools[missing].1);
        repaired = true;
    }

    error!("strict mode could not cover all classes in {} rounds", MAX_REPAIR_ATTEMPTS);
    Err(EngineError::GenerationError(
        "could not cover every enabled character class".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::charset::{SYMBOLS, is_similar};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn only(class: CharClass, length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            symbols: class == CharClass::Symbol,
            numbers: class == CharClass::Digit,
            uppercase: class == CharClass::Uppercase,
            lowercase: class == CharClass::Lowercase,
            spaces: class == CharClass::Space,
            exclude_similar_characters: false,
            strict: true,
        }
    }

    #[test]
    fn test_generate_password_default() {
        let password = generate_password(&GenerationConfig::default()).unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_password_single_classes() {
        let password = generate_password(&only(CharClass::Lowercase, 20)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));

        let password = generate_password(&only(CharClass::Uppercase, 20)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));

        let password = generate_password(&only(CharClass::Digit, 20)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));

        let password = generate_password(&only(CharClass::Symbol, 20)).unwrap();
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));

        let password = generate_password(&only(CharClass::Space, 4)).unwrap();
        assert_eq!(password, "    ");
    }

    #[test]
    fn test_length_bounds() {
        let mut config = GenerationConfig::default();
        config.length = 3;
        assert!(generate_password(&config).unwrap_err().is_config_error());
        config.length = 129;
        assert!(generate_password(&config).unwrap_err().is_config_error());
        config.length = 4;
        assert_eq!(generate_password(&config).unwrap().len(), 4);
        config.length = 128;
        assert_eq!(generate_password(&config).unwrap().len(), 128);
    }

    #[test]
    fn test_no_class_enabled() {
        let config = GenerationConfig {
            numbers: false,
            uppercase: false,
            lowercase: false,
            ..Default::default()
        };
        match generate_password(&config) {
            Err(EngineError::ConfigError(msg)) => assert!(msg.contains("character class")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_needs_room_for_every_class() {
        let config = GenerationConfig {
            length: 4,
            symbols: true,
            numbers: true,
            uppercase: true,
            lowercase: true,
            spaces: true,
            exclude_similar_characters: false,
            strict: true,
        };
        assert!(config.validate().unwrap_err().is_config_error());

        let relaxed = GenerationConfig { strict: false, ..config.clone() };
        assert!(relaxed.validate().is_ok());

        let longer = GenerationConfig { length: 5, ..config };
        let password = generate_password(&longer).unwrap();
        assert!(password.chars().any(|c| c == ' '));
        assert!(password.chars().any(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_strict_minimum_length_covers_all() {
        let config = GenerationConfig {
            length: 5,
            symbols: true,
            numbers: true,
            uppercase: true,
            lowercase: true,
            spaces: true,
            exclude_similar_characters: true,
            strict: true,
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let password = generate_password_with(&config, &mut rng).unwrap();
            let seen: HashSet<CharClass> = password.chars().filter_map(CharClass::of).collect();
            assert_eq!(seen.len(), 5, "missing class in {:?}", password);
        }
    }

    #[test]
    fn test_exclude_similar() {
        let config = GenerationConfig {
            length: 128,
            symbols: true,
            exclude_similar_characters: true,
            ..Default::default()
        };
        for _ in 0..20 {
            let password = generate_password(&config).unwrap();
            assert!(!password.chars().any(is_similar), "{:?}", password);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GenerationConfig::default();
        let a = generate_password_with(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_password_with(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_password_uniqueness() {
        let config = only(CharClass::Lowercase, 8);
        let passwords: HashSet<String> =
            (0..1000).map(|_| generate_password(&config).unwrap()).collect();
        assert_eq!(passwords.len(), 1000);
    }

    #[test]
    fn test_repair_keeps_other_classes() {
        let pools: Vec<(CharClass, Vec<char>)> = [CharClass::Lowercase, CharClass::Digit]
            .into_iter()
            .map(|c| (c, c.pool(false)))
            .collect();
        let mut password: Vec<char> = "abcd".chars().collect();
        let mut rng = StdRng::seed_from_u64(1);
        repair_coverage(&mut password, &pools, &mut rng).unwrap();

        assert_eq!(password.len(), 4);
        assert_eq!(password.iter().filter(|c| c.is_ascii_digit()).count(), 1);
        assert_eq!(password.iter().filter(|c| c.is_ascii_lowercase()).count(), 3);
    }

    #[test]
    fn test_repair_without_surplus_fails() {
        let pools: Vec<(CharClass, Vec<char>)> = [CharClass::Lowercase, CharClass::Digit]
            .into_iter()
            .map(|c| (c, c.pool(false)))
            .collect();
        let mut password = vec!['a'];
        let mut rng = StdRng::seed_from_u64(1);

        match repair_coverage(&mut password, &pools, &mut rng) {
            Err(EngineError::GenerationError(_)) => {}
            other => panic!("Expected GenerationError, got {:?}", other),
        }
        assert_eq!(password, vec!['a']);
    }

    #[test]
    fn test_config_serde_camel_case() {
        let json = r#"{"length":12,"symbols":false,"numbers":true,"uppercase":true,
            "lowercase":true,"spaces":false,"excludeSimilarCharacters":true,"strict":true}"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.length, 12);
        assert!(config.exclude_similar_characters);

        let partial: GenerationConfig = serde_json::from_str(r#"{"length":8}"#).unwrap();
        assert_eq!(partial, GenerationConfig { length: 8, ..Default::default() });
    }
}
