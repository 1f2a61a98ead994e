//! Error types for the epp2json-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the epp2json library.
///
/// Every variant names the phase that failed, so a terminating diagnostic
/// built from the `Display` output tells the user where the conversion
/// stopped.
#[derive(Error, Debug)]
pub enum EppError {
    /// The input file could not be opened.
    #[error("cannot open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or decoding the input stream failed.
    #[error("failed to read file: {0}")]
    Read(#[source] std::io::Error),

    /// The `[INFO]` line could not be tokenized.
    #[error("failed to parse info line: {0}")]
    Info(#[source] MalformedLine),

    /// A section header could not be tokenized.
    #[error("failed to parse invoice header: {0}")]
    Header(#[source] MalformedLine),

    /// A section content line could not be tokenized.
    #[error("failed to parse invoice item: {0}")]
    Item(#[source] MalformedLine),

    /// JSON serialization failed.
    #[error("failed to convert to JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("cannot write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A line that cannot be split into CSV fields.
///
/// Columns are 1-based character positions within the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedLine {
    /// A `"` appeared inside a field that did not start with a quote.
    #[error("bare \" in non-quoted field at column {column}")]
    BareQuote { column: usize },

    /// A closing quote was followed by something other than a delimiter.
    #[error("extraneous \" in quoted field at column {column}")]
    ExtraneousQuote { column: usize },

    /// A quoted field was never closed.
    #[error("unterminated quoted field starting at column {column}")]
    UnterminatedQuote { column: usize },

    /// The line holds no record at all.
    #[error("no CSV record in line")]
    Empty,

    /// The CSV reader rejected the record.
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type for the epp2json library.
pub type Result<T> = std::result::Result<T, EppError>;
