use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored numeric identifier from String
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The incremental user ID space is exhausted
    #[error("User ID {0} cannot be incremented any further")]
    UserIdOverflow(String),
}
