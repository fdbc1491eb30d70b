//! Error constructors shared by the file reader.

use camino::Utf8Path;

use crate::ConfigError;

/// Construct a [`ConfigError::Open`] for a configuration path.
pub(super) fn open_error(path: &Utf8Path, source: std::io::Error) -> ConfigError {
    ConfigError::Open {
        path: path.to_path_buf(),
        source,
    }
}

/// Construct a [`ConfigError::Read`] for a failure at `line`.
pub(super) fn read_error(path: &Utf8Path, line: usize, source: std::io::Error) -> ConfigError {
    ConfigError::Read {
        path: path.to_path_buf(),
        line,
        source,
    }
}
