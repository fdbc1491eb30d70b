//! Resolution entry point tying the three sources together.

use std::ffi::OsString;

use camino::{Utf8Path, Utf8PathBuf};

use crate::args::{ArgValues, read_args};
use crate::file::read_config_file;
use crate::merge::merge_items;
use crate::schema::{CONFIG_PATH_OPTION, HELP_OPTION, MissingFile, PRESENT, Schema};
use crate::{ConfigError, ConfigResult, FlatMap};

/// Outcome of [`Schema::resolve`].
///
/// Holds one value per option, including the automatic `help` and, when a
/// configuration file name was supplied, `cfgpath` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    schema: Schema,
    values: FlatMap,
    remaining: Vec<String>,
    config_file: Option<Utf8PathBuf>,
}

impl ResolvedConfig {
    /// Resolved value for `name`, or `None` when the schema has no such
    /// option.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Resolved value for `name`, treating unknown options as empty.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Returns `true` when `name` resolved to the `"yes"` sentinel.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name) == Some(PRESENT)
    }

    /// Returns `true` when `-h` was supplied.
    #[must_use]
    pub fn help_requested(&self) -> bool {
        self.is_enabled(HELP_OPTION)
    }

    /// Positional arguments left over after the flags.
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// The configuration file whose values were merged, if one was read.
    #[must_use]
    pub fn config_file(&self) -> Option<&Utf8Path> {
        self.config_file.as_deref()
    }

    /// The schema that was parsed, built-in options included.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Borrow the resolved mapping.
    #[must_use]
    pub const fn as_map(&self) -> &FlatMap {
        &self.values
    }

    /// Consume the result, keeping only the resolved mapping.
    #[must_use]
    pub fn into_map(self) -> FlatMap {
        self.values
    }
}

impl Schema {
    /// Resolve configuration from the process arguments, an optional
    /// configuration file and the schema defaults.
    ///
    /// See [`Schema::resolve_from`] for the exact steps.
    ///
    /// # Errors
    ///
    /// Returns the errors described on [`Schema::resolve_from`].
    pub fn resolve(&self, config_file: Option<&str>) -> ConfigResult<ResolvedConfig> {
        self.resolve_from(std::env::args_os(), config_file)
    }

    /// Resolve configuration from an explicit argument vector whose first
    /// element is the program name.
    ///
    /// A `help` switch (`-h`) is always added. When `config_file` is a
    /// non-empty name, a `cfgpath` option (`-c <path>`) is added too, with
    /// `config_file` as its default. The file named by `-c`, or failing that
    /// `config_file`, is then read and merged. The schema itself is left
    /// unchanged.
    ///
    /// For every option the command-line value wins when non-empty, then the
    /// file value when non-empty, then the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use layered_opts::Schema;
    ///
    /// let mut schema = Schema::new();
    /// schema.add_option("port", "p", true, "Port to listen on", "8080");
    /// let resolved = schema.resolve_from(["demo", "-p", "7000"], None)?;
    /// assert_eq!(resolved.value("port"), "7000");
    /// assert!(!resolved.help_requested());
    /// # Ok::<(), layered_opts::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CliParsing`] for bad command lines,
    /// [`ConfigError::Read`] when the file cannot be read, and
    /// [`ConfigError::Open`] when it cannot be opened under
    /// [`MissingFile::Fail`]. Schema problems found by [`Schema::validate`]
    /// are reported before anything is parsed.
    pub fn resolve_from<I, T>(
        &self,
        args: I,
        config_file: Option<&str>,
    ) -> ConfigResult<ResolvedConfig>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let default_file = config_file.filter(|name| !name.is_empty());
        let effective = self.with_builtins(default_file);
        let ArgValues {
            values: arg_values,
            remaining,
        } = read_args(&effective, args)?;

        let path = default_file.map(|default| {
            match arg_values.get(CONFIG_PATH_OPTION).map(String::as_str) {
                Some(over) if !over.is_empty() => Utf8PathBuf::from(over),
                _ => Utf8PathBuf::from(default),
            }
        });
        let (file_values, config_file) = match path {
            Some(path) => self.load_file(path)?,
            None => (FlatMap::new(), None),
        };

        Ok(ResolvedConfig {
            values: merge_items(&arg_values, &file_values, &effective),
            schema: effective,
            remaining,
            config_file,
        })
    }

    fn load_file(&self, path: Utf8PathBuf) -> ConfigResult<(FlatMap, Option<Utf8PathBuf>)> {
        tracing::debug!(path = %path, "reading configuration file");
        match read_config_file(&path) {
            Ok(values) => Ok((values, Some(path))),
            Err(ConfigError::Open { path: missing, source })
                if self.missing_file() == MissingFile::UseDefaults =>
            {
                tracing::warn!(
                    path = %missing,
                    error = %source,
                    "unable to open configuration file; using default values"
                );
                Ok((FlatMap::new(), None))
            }
            Err(err) => Err(err),
        }
    }
}
