//! Error types for the invox-core library.

use thiserror::Error;

/// Main error type for the invox library.
#[derive(Error, Debug)]
pub enum InvoxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing. Unreadable input is fatal for the run.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to invoice persistence.
///
/// Any of these aborts the whole persist operation before a row is written;
/// nothing is retried.
#[derive(Error, Debug)]
pub enum PersistError {
    /// The payer name is absent, so no table can be derived.
    #[error("payer name is missing; cannot derive a table")]
    MissingPayer,

    /// The payer name does not sanitize to a safe schema object name.
    #[error("payer name {0:?} does not sanitize to a valid table name")]
    InvalidIdent(String),

    /// A date field failed strict normalization.
    #[error("unparseable {field}: {value:?} (expected YYYY-MM-DD or YYYY)")]
    DateFormat { field: String, value: String },

    /// The grand total is not decimal text.
    #[error("unparseable grand total: {0:?}")]
    Amount(String),

    /// Line items could not be serialized.
    #[error("failed to serialize line items: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Connection, schema, or insert failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for the invox library.
pub type Result<T> = std::result::Result<T, InvoxError>;
