//! Error types shared by the quote crates.
//!
//! `QuoteError` covers I/O and JSON failures as well as violations of the
//! `Quote` and `ApiResponse` data contracts, so every crate in the workspace
//! can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type for the quote workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error while reading quote or response files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The provenance tag is not one of `quotegarden`, `quotable` or `local`.
    #[error("Unknown quote source: {0}")]
    UnknownSource(String),

    /// Quote id is empty or whitespace only.
    #[error("Quote id must not be blank")]
    BlankId,

    /// Quote text is shorter or longer than the allowed range.
    #[error("Quote {id}: text length {length} is outside {min}..={max}")]
    TextLength {
        /// Offending quote id.
        id: String,
        /// Character count of the text.
        length: usize,
        /// Smallest allowed length.
        min: usize,
        /// Largest allowed length.
        max: usize,
    },

    /// The stored `length` does not match the character count of `text`.
    #[error("Quote {id}: length field {stored} does not match text length {actual}")]
    LengthMismatch {
        /// Offending quote id.
        id: String,
        /// Value of the `length` field.
        stored: usize,
        /// Actual character count of `text`.
        actual: usize,
    },

    /// Author is empty or whitespace only.
    #[error("Quote {0}: author must not be blank")]
    BlankAuthor(String),

    /// Two quotes in one collection share an id.
    #[error("Duplicate quote id: {0}")]
    DuplicateId(String),

    /// An `ApiResponse` whose `success`, `data` and `error` fields disagree.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No quote matched the requested category.
    #[error("No quote found for category: {0}")]
    NoQuoteFound(String),
}
