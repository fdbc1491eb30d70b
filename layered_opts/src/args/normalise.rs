//! Rewrites single-dash long flags into the double-dash form `clap` expects.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::schema::Schema;

/// Scanning state while walking the argument vector.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Flags,
    Value,
    Done,
}

/// Returns the rewritten token and whether the next token is a value.
fn rewrite(token: &str, flags: &HashMap<&str, bool>) -> Option<(Option<String>, bool)> {
    let body = token.strip_prefix('-').filter(|b| !b.is_empty())?;
    let doubled = body.starts_with('-');
    let bare = body.strip_prefix('-').unwrap_or(body);
    let (stem, inline) = match bare.split_once('=') {
        Some((stem, _)) => (stem, true),
        None => (bare, false),
    };
    let Some(&takes_value) = flags.get(stem) else {
        return Some((None, false));
    };
    let needs_value = takes_value && !inline;
    if doubled || stem.chars().count() == 1 {
        Some((None, needs_value))
    } else {
        Some((Some(format!("--{bare}")), needs_value))
    }
}

/// Normalise `args` so that `-name` and `-name=value` reach `clap` as long
/// flags.
///
/// Rewriting stops at `--` or at the first positional argument; tokens after
/// that point pass through untouched, as do values consumed by value flags.
pub(super) fn normalise_args<I, T>(schema: &Schema, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let flags: HashMap<&str, bool> = schema
        .options()
        .iter()
        .filter(|opt| opt.has_flag())
        .map(|opt| (opt.flag.as_str(), opt.takes_value))
        .collect();
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();
    let mut state = Scan::Flags;
    for token in iter {
        if state != Scan::Flags {
            if state == Scan::Value {
                state = Scan::Flags;
            }
            out.push(token);
            continue;
        }
        let Some(text) = token.to_str() else {
            out.push(token);
            continue;
        };
        if text == "--" {
            state = Scan::Done;
            out.push(token);
            continue;
        }
        match rewrite(text, &flags) {
            Some((rewritten, needs_value)) => {
                if needs_value {
                    state = Scan::Value;
                }
                out.push(rewritten.map_or(token, OsString::from));
            }
            None => {
                state = Scan::Done;
                out.push(token);
            }
        }
    }
    out
}
