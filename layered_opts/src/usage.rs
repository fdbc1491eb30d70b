//! Help table rendering.

use std::io::{self, Write};

use crate::schema::{OptionSpec, Schema};

const TOKEN_WIDTH: usize = 20;

fn option_token(opt: &OptionSpec) -> String {
    if opt.takes_value {
        format!("  -{} <{}>", opt.flag, opt.name)
    } else {
        format!("  -{}", opt.flag)
    }
}

impl Schema {
    /// Render the usage table: `title` on its own line followed by one line
    /// per flagged option in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use layered_opts::Schema;
    ///
    /// let mut schema = Schema::new();
    /// schema
    ///     .add_option("port", "p", true, "Port to listen on", "8080")
    ///     .add_option("secret", "", true, "Never shown", "");
    /// assert_eq!(
    ///     schema.render_usage("demo"),
    ///     "demo\n     -p <port>          : Port to listen on\n",
    /// );
    /// ```
    #[must_use]
    pub fn render_usage(&self, title: &str) -> String {
        let mut out = format!("{title}\n");
        for opt in self.options().iter().filter(|o| o.has_flag()) {
            out.push_str(&format!(
                "   {:<width$} : {}\n",
                option_token(opt),
                opt.description,
                width = TOKEN_WIDTH,
            ));
        }
        out
    }

    /// Write the usage table to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any [`io::Error`] raised by `writer`.
    pub fn write_usage<W: Write>(&self, writer: &mut W, title: &str) -> io::Result<()> {
        writer.write_all(self.render_usage(title).as_bytes())
    }

    /// Print the usage table to standard output.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when writing to standard output fails.
    pub fn print_usage(&self, title: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_usage(&mut stdout, title)
    }
}
