//! Error types for the ebon-core library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ebon library.
#[derive(Error, Debug)]
pub enum EbonError {
    /// Receipt source rendering error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Receipt line parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Category store persistence error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to rendering a receipt source to text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The input path does not reference an existing file.
    #[error("file \"{}\" does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The input extension is not a supported receipt source.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to turning candidate lines into items.
///
/// Both variants are fatal for the run: a candidate line that does not parse
/// means the filter boundaries were wrong for this document, so a partial
/// item list would be misleading.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A candidate line has no name/price split.
    #[error("line does not match the \"name  price\" shape: {line:?}")]
    MalformedLine { line: String },

    /// The trailing token of a candidate line is not numeric.
    #[error("invalid price token {token:?} in line {line:?}")]
    Price { line: String, token: String },
}

/// Errors related to category store persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file exists but is not a valid category list.
    #[error("category config \"{}\" is corrupt: {source}", .path.display())]
    ConfigCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read or write the store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A recoverable editing error: surfaced locally by the assignment editor,
/// never fatal to the session.
#[derive(Error, Debug)]
pub enum EditError {
    /// A user-supplied item or category index is out of bounds.
    #[error("index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for the ebon library.
pub type Result<T> = std::result::Result<T, EbonError>;
