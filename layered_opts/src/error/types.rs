//! Primary error enum for configuration resolution.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Error parsing command-line arguments.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// The configuration file could not be opened.
    #[error("Unable to open configuration file '{path}': {source}")]
    Open {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part-way through the configuration file.
    #[error("Failed to read configuration file '{path}' at line {line}: {source}")]
    Read {
        /// Path being read.
        path: Utf8PathBuf,
        /// One-based line number at which reading stopped.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Two options share the same name.
    #[error("duplicate option name '{name}'")]
    DuplicateName {
        /// Name registered more than once.
        name: String,
    },

    /// Two options share the same command-line flag.
    #[error("duplicate flag '-{flag}' used by options '{first}' and '{second}'")]
    DuplicateFlag {
        /// Flag token registered more than once.
        flag: String,
        /// Option that claimed the flag first.
        first: String,
        /// Option that attempted to reuse it.
        second: String,
    },

    /// A flag token cannot be expressed on the command line.
    #[error("invalid flag '{flag}' for option '{name}': {reason}")]
    InvalidFlag {
        /// Option carrying the flag.
        name: String,
        /// Offending flag token.
        flag: String,
        /// Why the flag was rejected.
        reason: &'static str,
    },
}

impl From<clap::Error> for ConfigError {
    fn from(e: clap::Error) -> Self {
        Self::CliParsing(Box::new(e))
    }
}
