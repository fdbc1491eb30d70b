//! Layered option resolution for small command-line tools.
//!
//! A [`Schema`] lists the options an application understands. Resolving it
//! merges three sources per option: a non-empty command-line value wins,
//! then a non-empty value from an optional `key = value` configuration file,
//! then the option's default. All values are strings; switches resolve to
//! `"yes"` when set.
//!
//! ```no_run
//! use layered_opts::Schema;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut schema = Schema::new();
//! schema
//!     .add_option("port", "p", true, "Port to listen on", "8080")
//!     .add_option("verbose", "v", false, "Chatty output", "");
//! let resolved = schema.resolve(Some("server.conf"))?;
//! if resolved.help_requested() {
//!     resolved.schema().print_usage("server [options]")?;
//!     return Ok(());
//! }
//! let port: u16 = resolved.value("port").parse()?;
//! # let _ = port;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

pub mod args;
mod error;
mod file;
mod merge;
mod resolve;
pub mod schema;
mod usage;

pub use args::{ArgValues, read_args};
pub use error::{ConfigError, ConfigResult};
pub use file::{parse_config_str, read_config_file};
pub use merge::{merge_items, merge_value};
pub use resolve::ResolvedConfig;
pub use schema::{MissingFile, OptionSpec, Schema};

/// Single-level mapping from option name (or file key) to raw string value.
pub type FlatMap = BTreeMap<String, String>;
