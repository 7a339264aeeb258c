//! Common password lookup table
//!
//! Loaded once and never mutated afterwards. Matching is exact and
//! case-sensitive.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::trace;

use crate::error::Result;
use crate::utils::common::parse_lines;

/// Version tag of the embedded list; bump when the file changes
pub const BUILTIN_LIST_VERSION: u32 = 1;

const BUILTIN_PASSWORDS: &str = include_str!("common_passwords.txt");

static BUILTIN: LazyLock<Arc<CommonPasswords>> = LazyLock::new(|| {
    trace!("loading built-in common password list v{}", BUILTIN_LIST_VERSION);
    Arc::new(CommonPasswords::from_entries(parse_lines(BUILTIN_PASSWORDS.lines())))
});

/// Read-only set of known common passwords
#[derive(Debug, Clone, Default)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// The embedded list, parsed once per process
    pub fn builtin() -> Arc<CommonPasswords> {
        Arc::clone(&BUILTIN)
    }

    fn from_entries(entries: Vec<String>) -> Self {
        let entries: HashSet<String> = entries.into_iter().collect();
        trace!("common password table loaded with {} entries", entries.len());
        Self { entries }
    }

    /// Parse a list with one password per line.
    ///
    /// Lines are trimmed, so passwords with surrounding whitespace cannot be
    /// listed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Ok(Self::from_entries(parse_lines(lines.iter().map(String::as_str))))
    }

    /// Load a list file
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bits an attacker needs to walk this list: log2 of its size
    pub fn guess_bits(&self) -> f64 {
        (self.entries.len().max(1) as f64).log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_membership() {
        let common = CommonPasswords::builtin();
        assert!(common.contains("password"));
        assert!(common.contains("123456"));
        assert!(common.contains("qwerty"));
        assert!(!common.contains("correct-horse-battery-staple"));
        assert!(!common.contains(""));
    }

    #[test]
    fn test_case_sensitive() {
        let common = CommonPasswords::builtin();
        assert!(common.contains("password"));
        assert!(common.contains("Password"));
        assert!(!common.contains("PASSWORD"));
        assert!(!common.contains(" password"));
    }

    #[test]
    fn test_comments_are_not_entries() {
        let common = CommonPasswords::builtin();
        assert!(!common.contains("# Frequently leaked passwords, matched case-sensitively"));
        assert!(common.contains("!@#$%^&*"));
    }

    #[test]
    fn test_guess_bits() {
        let common = CommonPasswords::from_reader("a\nb\nc\nd\n".as_bytes()).unwrap();
        assert_eq!(common.len(), 4);
        assert_eq!(common.guess_bits(), 2.0);

        let empty = CommonPasswords::default();
        assert!(empty.is_empty());
        assert_eq!(empty.guess_bits(), 0.0);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom\nhunter2\ncorrecthorse").unwrap();
        let common = CommonPasswords::from_path(file.path()).unwrap();
        assert_eq!(common.len(), 2);
        assert!(common.contains("hunter2"));
        assert!(!common.contains("password"));
    }
}
