//! Helpers for classifying errors at application entry points.

use super::ConfigError;

impl ConfigError {
    /// Process exit code an application should use when giving up on this
    /// error.
    ///
    /// Command-line errors reuse the code `clap` itself would exit with;
    /// everything else maps to `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use layered_opts::ConfigError;
    /// let err = ConfigError::DuplicateName { name: "port".into() };
    /// assert_eq!(err.exit_code(), 1);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CliParsing(err) => err.exit_code(),
            _ => 1,
        }
    }

    /// Returns `true` when the error stems from the command line.
    #[must_use]
    pub const fn is_cli(&self) -> bool {
        matches!(self, Self::CliParsing(_))
    }
}
