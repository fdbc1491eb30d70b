//! Flag token validation.

use crate::{ConfigError, ConfigResult};

use super::OptionSpec;

fn flag_error(flag: &str) -> Option<&'static str> {
    if flag.starts_with('-') {
        return Some("flags are registered without leading dashes");
    }
    if !flag
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'))
    {
        return Some("flags may only contain ASCII letters, digits, '-' and '_'");
    }
    None
}

/// Rejects flag tokens that cannot be typed as `-flag` on a command line.
///
/// Options with an empty flag are always accepted.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidFlag`] describing the problem.
pub fn check_flag(opt: &OptionSpec) -> ConfigResult<()> {
    match flag_error(&opt.flag) {
        Some(reason) if opt.has_flag() => Err(ConfigError::InvalidFlag {
            name: opt.name.clone(),
            flag: opt.flag.clone(),
            reason,
        }),
        _ => Ok(()),
    }
}
