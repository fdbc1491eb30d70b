//! Runtime entrypoint for reading a configuration file from disk.

use std::io::{BufRead, BufReader};

use camino::Utf8Path;

use crate::{ConfigResult, FlatMap};

use super::error::{open_error, read_error};
use super::helpers::open_config_file;
use super::parser::parse_line;

/// Read a `key = value` configuration file into a flat mapping.
///
/// The file is read line by line with the same rules as
/// [`parse_config_str`](crate::parse_config_str). The handle is closed before
/// this function returns, whatever the outcome.
///
/// # Errors
///
/// Returns [`ConfigError::Open`](crate::ConfigError::Open) when the file
/// cannot be opened, and [`ConfigError::Read`](crate::ConfigError::Read) when
/// a line cannot be read (including invalid UTF-8).
pub fn read_config_file(path: &Utf8Path) -> ConfigResult<FlatMap> {
    let file = open_config_file(path).map_err(|e| open_error(path, e))?;
    let mut values = FlatMap::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let text = line.map_err(|e| read_error(path, idx + 1, e))?;
        match parse_line(&text) {
            Some((key, value)) => {
                values.insert(key, value);
            }
            None => tracing::trace!(path = %path, line = idx + 1, "skipping line"),
        }
    }
    tracing::debug!(path = %path, entries = values.len(), "read configuration file");
    Ok(values)
}
