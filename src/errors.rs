/*!
 * Error types for the docmirror application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the external translation oracle
#[derive(Error, Debug)]
pub enum OracleError {
    /// The oracle process could not be launched
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle did not answer within the allowed time
    #[error("Oracle timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// The oracle exited with a failure status
    #[error("Oracle exited with status {code}: {stderr}")]
    NonZeroExit {
        /// Exit code, -1 when the process was killed by a signal
        code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// The oracle answered with something that cannot be used as a translation
    #[error("Oracle returned unusable output: {0}")]
    BadOutput(String),
}

/// Errors that can occur while translating a single document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The source document could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The translated document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Translation produced nothing to write
    #[error("Translation produced empty output")]
    EmptyOutput,
}

/// Application-level error that wraps the errors of each stage
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file system operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the translation oracle
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Error from translating a single document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Any other error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(format!("{:#}", error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
