//! Line rules for the `key = value` format.

use crate::FlatMap;

/// Split one line into a lower-cased key and a quote-free value.
///
/// Returns `None` for full-line comments and for lines without `=`.
pub(super) fn parse_line(line: &str) -> Option<(String, String)> {
    if line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim().to_lowercase(), value.trim().replace('"', "")))
}

/// Parse configuration text held in memory.
///
/// Comment lines (first character `#`) and lines without `=` are dropped.
/// Keys are trimmed and lower-cased; values are trimmed and every `"` is
/// removed. Later duplicates replace earlier ones.
///
/// # Examples
///
/// ```
/// use layered_opts::parse_config_str;
///
/// let values = parse_config_str("# greeting\nNAME = \"Bob\"\nnonsense\n");
/// assert_eq!(values.get("name").map(String::as_str), Some("Bob"));
/// assert_eq!(values.len(), 1);
/// ```
#[must_use]
pub fn parse_config_str(text: &str) -> FlatMap {
    text.lines().filter_map(parse_line).collect()
}
