//! Error types produced while resolving configuration.

mod helpers;
mod types;

pub use types::ConfigError;

/// Result alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;
