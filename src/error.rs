//! Error type for the casecycle library.
//!
//! The converters themselves never fail; errors only come from configuration
//! and from the host-level entry point when no selection is available.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for casecycle operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The host asked for a transformation without a selection
    #[error("no text selected")]
    NoSelection,

    /// The delimiter cannot separate words
    #[error("invalid delimiter {0:?}: must be a single non-alphanumeric, non-whitespace character")]
    InvalidDelimiter(char),

    #[error("unknown rotation '{0}' (expected 'full' or 'simple')")]
    InvalidRotation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::NoSelection.to_string(), "no text selected");
        assert!(Error::InvalidDelimiter('a').to_string().contains("'a'"));
        assert!(Error::InvalidRotation("sideways".to_string())
            .to_string()
            .contains("sideways"));
    }
}
