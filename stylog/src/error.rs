//! Errors for the few fallible entry points.
//!
//! Logging itself is total: limits and failures inside the pipeline turn into
//! placeholders or console output, never into `Err`. Only configuration
//! loading can fail.

/// Errors returned by configuration loading.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A redaction configuration document could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid redaction config: {0}")]
    Config(#[from] serde_json::Error),
    /// An environment variable held a value that is not valid unicode.
    #[error("environment variable `{name}` is not valid unicode")]
    NonUnicodeEnv {
        /// Name of the variable.
        name: String,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
