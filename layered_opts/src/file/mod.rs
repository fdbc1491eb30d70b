//! Reading the optional `key = value` configuration file.

mod error;
mod helpers;
mod loader;
mod parser;

pub use loader::read_config_file;
pub use parser::parse_config_str;

#[cfg(test)]
mod tests;
