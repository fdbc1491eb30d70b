//! Command-line source.
//!
//! Each flagged option in a [`Schema`] becomes a `clap` argument: value
//! options take a string, the rest are presence switches that also accept an
//! inline boolean (`-v=false`). Parsing failures are
//! returned as [`ConfigError::CliParsing`](crate::ConfigError::CliParsing)
//! instead of exiting the process.

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::schema::{OptionSpec, PRESENT, Schema};
use crate::{ConfigResult, FlatMap};

mod normalise;

use normalise::normalise_args;

const REMAINING_ID: &str = "layered_opts::remaining";
const DEFAULT_PROGRAM: &str = "app";

/// Values read from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgValues {
    /// One entry per schema option, keyed by option name. Presence switches
    /// hold `"yes"` when supplied; anything absent holds an empty string.
    pub values: FlatMap,
    /// Positional arguments following the flags, in order.
    pub remaining: Vec<String>,
}

fn option_arg(opt: &OptionSpec) -> Arg {
    let mut arg = Arg::new(opt.name.clone())
        .long(opt.flag.clone())
        .help(opt.description.clone());
    let mut chars = opt.flag.chars();
    if let (Some(short), None) = (chars.next(), chars.next()) {
        arg = arg.short(short);
    }
    if opt.takes_value {
        arg.action(ArgAction::Set)
            .num_args(1)
            .allow_hyphen_values(true)
            .value_name(opt.name.clone())
    } else {
        arg.action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(parse_switch)
    }
}

/// Inline value of a switch such as `-v=false`. Accepts the spellings of
/// Go's `strconv.ParseBool`.
fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(format!("invalid boolean value {other:?}")),
    }
}

/// Build the `clap` command describing every flagged option in `schema`.
///
/// Options without a flag are left out. Repeated flags keep the last value.
#[must_use]
pub fn build_command(schema: &Schema) -> Command {
    let program = schema.program_name().unwrap_or(DEFAULT_PROGRAM).to_owned();
    let mut command = Command::new(program.clone())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new(REMAINING_ID)
                .action(ArgAction::Append)
                .num_args(1..)
                .trailing_var_arg(true)
                .hide(true),
        );
    if schema.program_name().is_some() {
        command = command.bin_name(program);
    }
    command.args(schema.options().iter().filter(|o| o.has_flag()).map(option_arg))
}

fn option_value(matches: &ArgMatches, opt: &OptionSpec) -> String {
    if !opt.has_flag() {
        String::new()
    } else if opt.takes_value {
        matches
            .get_one::<String>(&opt.name)
            .cloned()
            .unwrap_or_default()
    } else if matches.get_one::<bool>(&opt.name).copied().unwrap_or(false) {
        PRESENT.to_owned()
    } else {
        String::new()
    }
}

/// Parse `args` against `schema`.
///
/// The first element of `args` is the program name. Multi-character flags
/// are accepted with one or two leading dashes, and value flags accept both
/// `-flag value` and `-flag=value`. Switches accept `-flag`, `-flag=true` and
/// `-flag=false`; the last occurrence wins.
///
/// # Errors
///
/// Returns [`ConfigError::CliParsing`](crate::ConfigError::CliParsing) for
/// unknown flags, missing values, or values that are not valid UTF-8, and the
/// errors of [`Schema::validate`] for schemas that cannot be expressed as a
/// command line.
pub fn read_args<I, T>(schema: &Schema, args: I) -> ConfigResult<ArgValues>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    schema.validate()?;
    let argv = normalise_args(schema, args);
    let matches = build_command(schema).try_get_matches_from(argv)?;
    let values = schema
        .options()
        .iter()
        .map(|opt| (opt.name.clone(), option_value(&matches, opt)))
        .collect();
    let remaining = matches
        .get_many::<String>(REMAINING_ID)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    Ok(ArgValues { values, remaining })
}
