//!
//! Loading indicator for the quote display app.
//!
//! - `props` — raw inputs and their normalization to typed settings.
//! - `indicator` — the pure mapping from settings to presentational attributes.
//! - `html` — escaping helpers used when writing markup.
#![warn(missing_docs)]
pub mod html;
pub mod indicator;
pub mod props;

pub use indicator::Indicator;
pub use props::{Color, IndicatorProps, Size, Variant};
