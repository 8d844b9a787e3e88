//! Error types for the option list and its collaborators.

use thiserror::Error;

/// Result type for option list operations.
pub type OptionResult<T> = Result<T, OptionError>;

/// Result type for key-value store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by option list mutations and queries.
///
/// The two validation variants carry the exact messages shown to the user
/// next to the add-option input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The submitted text is empty after trimming.
    #[error("Enter valid value to add item")]
    Empty,

    /// The submitted text is already in the list.
    #[error("This option already exists")]
    Duplicate(String),

    /// A random pick was requested on an empty list.
    #[error("no options to pick from")]
    EmptyList,
}

/// Errors raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store I/O error at {path}: {source}")]
    Io {
        /// Path of the backing file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("store file {path} is not a valid key-value map: {source}")]
    Format {
        /// Path of the backing file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Why `initialize` fell back to an empty list.
///
/// Recorded for diagnostics only; never returned to the caller as fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The store itself failed to answer.
    #[error("could not read stored options: {0}")]
    Store(#[from] StoreError),

    /// The stored value is not a valid option list.
    #[error("stored options are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_text() {
        assert_eq!(
            OptionError::Empty.to_string(),
            "Enter valid value to add item"
        );
        assert_eq!(
            OptionError::Duplicate("x".into()).to_string(),
            "This option already exists"
        );
    }

    #[test]
    fn load_error_wraps_parse_failure() {
        let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let load = LoadError::from(err);
        assert!(load.to_string().starts_with("stored options are malformed"));
    }
}
