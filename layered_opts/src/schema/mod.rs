//! Option descriptors and the ordered schema that drives both argument
//! registration and merging.

use std::collections::{HashMap, HashSet};

use crate::{ConfigError, ConfigResult};

mod validate;

pub use validate::check_flag;

/// Name of the automatically registered help option.
pub const HELP_OPTION: &str = "help";
/// Name of the automatically registered config path override.
pub const CONFIG_PATH_OPTION: &str = "cfgpath";

/// Value the argument reader stores for a presence flag that was supplied.
pub const PRESENT: &str = "yes";

/// A single configurable setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Key used in every resulting mapping.
    pub name: String,
    /// Bare command-line token without its leading dash. Empty hides the
    /// option from the command line and from usage output.
    pub flag: String,
    /// Whether the flag expects a value rather than acting as a switch.
    pub takes_value: bool,
    /// Help text shown by the usage printer.
    pub description: String,
    /// Fallback used when neither the command line nor the file supply one.
    pub default: String,
}

impl OptionSpec {
    /// Returns `true` when the option is exposed on the command line.
    #[must_use]
    pub fn has_flag(&self) -> bool {
        !self.flag.is_empty()
    }
}

/// Policy applied when the configuration file cannot be opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFile {
    /// Abort resolution with [`ConfigError::Open`].
    #[default]
    Fail,
    /// Log a warning and continue with command-line values and defaults.
    UseDefaults,
}

/// Ordered collection of [`OptionSpec`]s.
///
/// Registration order is preserved and determines the order of the usage
/// listing.
///
/// # Examples
///
/// ```
/// use layered_opts::Schema;
///
/// let mut schema = Schema::new();
/// schema
///     .add_option("port", "p", true, "Port to listen on", "8080")
///     .add_option("verbose", "v", false, "Chatty output", "");
/// assert_eq!(schema.options().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    options: Vec<OptionSpec>,
    program_name: Option<String>,
    missing_file: MissingFile,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the program name reported in command-line error messages.
    #[must_use]
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Selects how resolution reacts when the configuration file cannot be
    /// opened.
    #[must_use]
    pub fn with_missing_file(mut self, policy: MissingFile) -> Self {
        self.missing_file = policy;
        self
    }

    /// Appends an option. Registration never fails; uniqueness is checked by
    /// [`Schema::validate`] when resolving.
    pub fn add_option(
        &mut self,
        name: impl Into<String>,
        flag: impl Into<String>,
        takes_value: bool,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> &mut Self {
        self.options.push(OptionSpec {
            name: name.into(),
            flag: flag.into(),
            takes_value,
            description: description.into(),
            default: default.into(),
        });
        self
    }

    /// Registered options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Looks up an option by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|opt| opt.name == name)
    }

    pub(crate) fn program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    pub(crate) const fn missing_file(&self) -> MissingFile {
        self.missing_file
    }

    /// Checks that names are unique and that every non-empty flag is usable
    /// and claimed by a single option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateName`], [`ConfigError::DuplicateFlag`]
    /// or [`ConfigError::InvalidFlag`] for the first offending option.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut names: HashSet<&str> = HashSet::with_capacity(self.options.len());
        let mut flags: HashMap<&str, &str> = HashMap::with_capacity(self.options.len());
        for opt in &self.options {
            if !names.insert(opt.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: opt.name.clone(),
                });
            }
            if !opt.has_flag() {
                continue;
            }
            check_flag(opt)?;
            if let Some(first) = flags.insert(opt.flag.as_str(), opt.name.as_str()) {
                return Err(ConfigError::DuplicateFlag {
                    flag: opt.flag.clone(),
                    first: first.to_owned(),
                    second: opt.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Copy of this schema with the automatic `help` and, when a config file
    /// name is supplied, `cfgpath` options appended.
    ///
    /// This is the schema resolution actually parses against, so it is the
    /// one to print usage for when resolution fails. Resolving the returned
    /// copy again reports the duplicated built-in names.
    #[must_use]
    pub fn with_builtins(&self, config_file: Option<&str>) -> Self {
        let mut effective = self.clone();
        effective.add_option(
            HELP_OPTION,
            "h",
            false,
            "Output usage information to the console",
            "no",
        );
        if let Some(file) = config_file.filter(|name| !name.is_empty()) {
            effective.add_option(
                CONFIG_PATH_OPTION,
                "c",
                true,
                "Path to configuration file",
                file,
            );
        }
        effective
    }
}
