//! Greeter entry-point: resolve options, print usage on `-h`, otherwise greet.

use std::io::{self, Write};
use std::process::ExitCode;

use layered_opts::{ConfigError, Schema};
use tracing_subscriber::EnvFilter;

use greeter::{CONFIG_FILE, USAGE_TITLE, render_message, schema};

/// Print `err` to stderr, adding the usage table for command-line mistakes,
/// and pick the matching exit code.
fn report(schema: &Schema, err: &ConfigError) -> color_eyre::Result<ExitCode> {
    match err {
        ConfigError::CliParsing(clap_err) => {
            clap_err.print()?;
            schema
                .with_builtins(Some(CONFIG_FILE))
                .print_usage(USAGE_TITLE)?;
        }
        other => writeln!(io::stderr().lock(), "greeter: {other}")?,
    }
    let code = u8::try_from(err.exit_code()).unwrap_or(1);
    Ok(ExitCode::from(code))
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let schema = schema();
    let resolved = match schema.resolve(Some(CONFIG_FILE)) {
        Ok(resolved) => resolved,
        Err(err) => return report(&schema, &err),
    };

    if resolved.help_requested() {
        resolved.schema().print_usage(USAGE_TITLE)?;
        return Ok(ExitCode::SUCCESS);
    }
    tracing::debug!(file = ?resolved.config_file(), "resolved configuration");

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_message(&resolved).as_bytes())?;
    Ok(ExitCode::SUCCESS)
}
