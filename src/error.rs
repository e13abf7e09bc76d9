use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling or serializing a PDF document
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("page is listed in the page order but missing from the document")]
    /// A page reference could not be resolved while writing
    PageMissing,

    #[error("font F{0} was never written to the document")]
    /// A page refers to a font that has no object reference
    FontMissing(usize),
}

/// All errors that a review generation run can end with. Every one of them is
/// fatal: the run stops and no output file is written.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("source file {0} does not exist")]
    /// The CSV source could not be found
    ResourceNotFound(PathBuf),

    #[error("line {line}: required field `{column}` is missing or blank")]
    /// A mandatory column is absent from the header, or blank in a row. Header
    /// problems are reported against line 1.
    MissingRequiredField { line: u64, column: &'static str },

    #[error("line {line}: unrecognized ToExclude value `{value}` (expected `yes`, `no` or blank)")]
    /// The exclusion flag held something other than yes/no in strict mode
    UnrecognizedExcludeFlag { line: u64, value: String },

    #[error(transparent)]
    /// The CSV source could not be parsed
    Csv(#[from] csv::Error),

    #[error(transparent)]
    /// Reading the source or writing the output failed
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// The document could not be serialized
    Pdf(#[from] PDFError),
}

/// Result type used throughout the crate
pub type Result<T, E = ReviewError> = std::result::Result<T, E>;
