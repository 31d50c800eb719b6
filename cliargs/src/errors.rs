//! Error types for command-line argument compilation

use thiserror::Error;

/// Errors that can occur while compiling an argument vector
///
/// These are the only three error kinds the compiler produces; the
/// classification of a token is deterministic and identical in every
/// compilation mode, only the handling policy differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliArgsError {
    /// A registered key was not followed by a value token
    #[error("Key '{0}' does not have a value assigned to it")]
    MissingValue(String),

    /// A long-form element is registered as neither key nor flag
    #[error("Unknown flag / key: '{0}'")]
    UnknownElement(String),

    /// An alias character has no registered long form
    #[error("Unknown alias: '-{0}'")]
    InvalidAlias(char),
}

/// Result type for argument compilation operations
pub type CliArgsResult<T> = Result<T, CliArgsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_message() {
        let err = CliArgsError::MissingValue("input".to_string());
        assert_eq!(
            err.to_string(),
            "Key 'input' does not have a value assigned to it"
        );
    }

    #[test]
    fn test_unknown_element_message() {
        let err = CliArgsError::UnknownElement("--unknown".to_string());
        assert_eq!(err.to_string(), "Unknown flag / key: '--unknown'");
    }

    #[test]
    fn test_invalid_alias_message() {
        let err = CliArgsError::InvalidAlias('x');
        assert_eq!(err.to_string(), "Unknown alias: '-x'");
    }

    #[test]
    fn test_errors_compare_structurally() {
        assert_eq!(
            CliArgsError::MissingValue("input".to_string()),
            CliArgsError::MissingValue("input".to_string())
        );
        assert_ne!(
            CliArgsError::UnknownElement("--a".to_string()),
            CliArgsError::UnknownElement("--b".to_string())
        );
    }
}
