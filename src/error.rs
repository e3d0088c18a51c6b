//! Error types for loading and reporting transactions.
//!
//! The transaction entity itself never fails; these errors only surface
//! from the I/O-facing parts of the crate.

use thiserror::Error;

/// Result type alias for loader, report and CLI operations
pub type Result<T> = std::result::Result<T, TransactionError>;

/// Errors that can occur while reading input or writing reports.
#[derive(Error, Debug)]
pub enum TransactionError {
    /// Failed to open, read or write a file or stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid transaction row in the input
    #[error("Invalid transaction at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// A command-line argument could not be interpreted
    #[error("Invalid value for {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: payment-transactions <input.csv> [fee_percentage]")]
    MissingArgument,
}

/// Error returned when a currency code is not in the ISO-4217 table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Unknown currency code: {0}")]
    Unknown(String),
}
