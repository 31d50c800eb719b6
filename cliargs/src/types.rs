//! Type definitions for compiled command-line arguments

use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structured result of compiling an argument vector
///
/// A `CliArgs` value holds the three classified argument containers: the set
/// of flags found present (duplicates collapse), the key/value pairs (the
/// last occurrence of a key wins), and the positional literal arguments in
/// their original order (duplicates allowed). Values are created by a
/// [`Compiler`](crate::Compiler) and are read-only once returned.
///
/// # Examples
///
/// ```
/// use cliargs::Compiler;
///
/// let args = Compiler::new()
///     .with_flags(["verbose"])
///     .with_keys(["input"])
///     .compile(["--verbose", "--input", "file.txt", "build"])?;
///
/// assert!(args.has_flag("verbose"));
/// assert_eq!(args.value("input"), Some("file.txt"));
/// assert_eq!(args.literal(0), Some("build"));
/// # Ok::<(), cliargs::CliArgsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CliArgs {
    /// Resolved flag names found present
    pub(crate) flags: HashSet<String>,
    /// Key names mapped to their associated value strings
    pub(crate) values: HashMap<String, String>,
    /// Positional literal arguments in order of appearance
    pub(crate) literals: Vec<String>,
}

impl CliArgs {
    /// Check if a specific flag was present
    #[must_use]
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Check if a key with an associated value was parsed
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Check if any key is assigned this value
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.values().any(|v| v == value)
    }

    /// Get the value associated with a key, if one was parsed
    ///
    /// When the same key appeared more than once in the compiled vector,
    /// this is the value of its last occurrence.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if a literal argument exists at the given position
    #[must_use]
    pub fn has_literal_at(&self, index: usize) -> bool {
        index < self.literals.len()
    }

    /// Check if a literal argument with the given content was parsed
    #[must_use]
    pub fn has_literal(&self, literal: &str) -> bool {
        self.literals.iter().any(|l| l == literal)
    }

    /// Get the literal argument at the given position, if it exists
    #[must_use]
    pub fn literal(&self, index: usize) -> Option<&str> {
        self.literals.get(index).map(String::as_str)
    }

    /// Returns a read-only view of the parsed flags
    #[must_use]
    pub fn flags(&self) -> &HashSet<String> {
        &self.flags
    }

    /// Returns a read-only view of the parsed key/value pairs
    #[must_use]
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Returns a read-only view of the literal arguments, in order
    #[must_use]
    pub fn literals(&self) -> &[String] {
        &self.literals
    }
}
