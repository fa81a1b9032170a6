//! Provenance tag shared by `Quote` and `ApiResponse`.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::QuoteError;

/// Where a quote came from.
///
/// `Local` means no remote call occurred and the quote was taken from the
/// built-in fallback dataset.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    /// The QuoteGarden provider.
    Quotegarden,
    /// The Quotable provider.
    Quotable,
    /// Built-in fallback dataset.
    Local,
}

impl Source {
    /// Parses a provenance tag, rejecting anything outside the three known values.
    ///
    /// Matching is exact on the lowercase tag. JSON decoding goes through here too.
    pub fn parse(tag: &str) -> Result<Self, QuoteError> {
        tag.parse::<Self>()
            .map_err(|_| QuoteError::UnknownSource(tag.to_string()))
    }

    /// True when the quote was produced by a remote provider.
    pub fn is_remote(&self) -> bool {
        !matches!(self, Source::Local)
    }
}

impl TryFrom<String> for Source {
    type Error = QuoteError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Source::parse(&tag)
    }
}
