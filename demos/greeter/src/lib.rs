//! Library facade for the `greeter` demo so tests can reuse the schema and
//! message builder.

use layered_opts::{MissingFile, ResolvedConfig, Schema};

/// Configuration file consulted when `-c` is not given.
pub const CONFIG_FILE: &str = "greeter.conf";

/// Title printed above the usage table.
pub const USAGE_TITLE: &str = "greeter: layered greetings from flags, greeter.conf and defaults";

/// Options understood by the greeter.
#[must_use]
pub fn schema() -> Schema {
    let mut schema = Schema::new()
        .with_program_name("greeter")
        .with_missing_file(MissingFile::UseDefaults);
    schema
        .add_option("name", "n", true, "Who to greet", "World")
        .add_option("greeting", "greeting", true, "Salutation to use", "Hello")
        .add_option("shout", "s", false, "Greet in capitals", "")
        .add_option("motd", "", true, "Message of the day", "");
    schema
}

/// Build the text printed for a resolved configuration.
///
/// # Examples
///
/// ```
/// let resolved = greeter::schema().resolve_from(["greeter", "-n", "Ada"], None)?;
/// assert_eq!(greeter::render_message(&resolved), "Hello, Ada!\n");
/// # Ok::<(), layered_opts::ConfigError>(())
/// ```
#[must_use]
pub fn render_message(config: &ResolvedConfig) -> String {
    let line = format!("{}, {}!", config.value("greeting"), config.value("name"));
    let mut out = if config.is_enabled("shout") {
        line.to_uppercase()
    } else {
        line
    };
    out.push('\n');
    let motd = config.value("motd");
    if !motd.is_empty() {
        out.push_str(motd);
        out.push('\n');
    }
    out
}
