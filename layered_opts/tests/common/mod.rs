//! Shared helpers for the resolution integration tests.

use std::cell::RefCell;

use anyhow::{Result, anyhow};
use figment::Jail;
use layered_opts::Schema;

/// Runs `f` inside a `figment::Jail` so relative configuration paths resolve
/// in a scratch directory, returning any propagated error as an
/// [`anyhow::Result`].
///
/// # Errors
///
/// Returns an error when either the inner closure fails or when the jailed
/// execution cannot be initialised.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> Result<T>,
{
    let output = RefCell::new(None);
    Jail::try_with(|j| {
        output.replace(Some(f(j)));
        Ok(())
    })
    .map_err(|err| anyhow!(err))?;
    output
        .into_inner()
        .ok_or_else(|| anyhow!("jail closure did not produce a result"))?
}

/// Schema used by most scenarios: one value option and one switch.
#[must_use]
pub fn port_schema() -> Schema {
    let mut schema = Schema::new().with_program_name("demo");
    schema
        .add_option("port", "p", true, "Port to listen on", "8080")
        .add_option("verbose", "v", false, "Chatty output", "");
    schema
}
