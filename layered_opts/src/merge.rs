//! Precedence resolution across command line, configuration file and
//! defaults.

use crate::FlatMap;
use crate::schema::Schema;

/// Pick the first non-empty value: command line, then file, then default.
///
/// # Examples
///
/// ```
/// use layered_opts::merge_value;
/// assert_eq!(merge_value("7000", "9090", "8080"), "7000");
/// assert_eq!(merge_value("", "9090", "8080"), "9090");
/// assert_eq!(merge_value("", "", "8080"), "8080");
/// ```
#[must_use]
pub fn merge_value<'a>(arg: &'a str, file: &'a str, default: &'a str) -> &'a str {
    [arg, file]
        .into_iter()
        .find(|value| !value.is_empty())
        .unwrap_or(default)
}

fn lookup<'a>(map: &'a FlatMap, name: &str) -> &'a str {
    map.get(name).map_or("", String::as_str)
}

/// Merge the argument and file mappings over the schema defaults.
///
/// The result holds exactly one entry per option, keyed by option name.
/// Missing entries in either source count as empty. File keys are stored
/// lower-cased, so the file is consulted with the lower-cased option name.
#[must_use]
pub fn merge_items(args: &FlatMap, file: &FlatMap, schema: &Schema) -> FlatMap {
    schema
        .options()
        .iter()
        .map(|opt| {
            let file_key = opt.name.to_lowercase();
            let value = merge_value(lookup(args, &opt.name), lookup(file, &file_key), &opt.default);
            (opt.name.clone(), value.to_owned())
        })
        .collect()
}
