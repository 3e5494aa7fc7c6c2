//! Error types for trueno-raster operations.
//!
//! The scan-conversion, transform and clipping functions never fail: degenerate
//! input produces an empty or single-pixel result. Errors only arise at the
//! edges of the crate (canvas bookkeeping, script parsing, configuration and
//! file output).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Algorithm name that no selector recognises.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// No primitive is stored under the given identifier.
    #[error("Unknown primitive: {0}")]
    UnknownPrimitive(String),

    /// Malformed command script line.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// A well-formed script command failed while executing.
    #[error("script error at line {line}: {source}")]
    Script {
        /// Line number of the failing command (1-indexed).
        line: usize,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}
