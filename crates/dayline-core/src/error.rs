// File: crates/dayline-core/src/error.rs
// Summary: Error type covering fetch, TSV parse, and configuration failures.

use thiserror::Error;

/// Errors produced while loading or parsing a day file.
///
/// Rendering uses `anyhow` at its surface; everything on the data path is a
/// variant here so callers can tell a dead URL from a corrupt row.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("request for {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request for {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed TSV")]
    Tsv(#[from] csv::Error),

    #[error("row {line}: unreadable timestamp {value:?}")]
    Timestamp { line: usize, value: String },

    #[error("row {line}: missing column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("row {line}, column {column}: unreadable number {value:?}")]
    Number {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("unknown scale name {0:?}")]
    UnknownScale(String),
}
