//! Error types for the castq application.
//!
//! Every failure in the application is expressed as a `CastqError` and
//! propagated up to the single top-level handler in `main`, which picks
//! the process exit status. Nothing below `main` terminates the process.

use thiserror::Error;

/// Application-wide error type.
#[derive(Error, Debug)]
pub enum CastqError {
    /// The process was started with the wrong number of arguments.
    #[error("Application requires username and password to run database.")]
    Usage,

    /// The store is unreachable or rejected the supplied credentials.
    #[error("Connection error: {0}")]
    Connection(#[source] mysql::Error),

    /// Execution of one of the prepared queries failed.
    #[error("Query error: {0}")]
    Query(String),

    /// Reading from the console input stream failed.
    #[error("Input error: {0}")]
    Input(String),

    /// The display configuration file is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing to the console output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use CastqError as the error type.
pub type Result<T> = std::result::Result<T, CastqError>;
