//!
//! Data contracts for the quote display app.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `source` — provenance tag shared by quotes and responses.
//! - `quote` — the `Quote` record and its validation rules.
//! - `response` — the `ApiResponse` envelope and provider rate-limit state.
//! - `local` — built-in fallback quotes used when no provider is called.
#![warn(missing_docs)]
pub mod error;
pub mod local;
pub mod quote;
pub mod response;
pub mod result;
pub mod source;

pub use error::QuoteError;
pub use quote::Quote;
pub use response::{ApiResponse, Outcome, RateLimit};
pub use result::Result;
pub use source::Source;
