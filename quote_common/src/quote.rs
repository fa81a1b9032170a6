//! Quote data model and validation.
//!
//! A `Quote` is a single attributed quotation. It is created by the fetch layer
//! or taken from the local fallback dataset and never modified afterwards;
//! requesting a new quote replaces the old value instead of updating it.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::source::Source;

/// Shortest accepted quote text, in characters.
pub const MIN_TEXT_LEN: usize = 10;
/// Longest accepted quote text, in characters.
pub const MAX_TEXT_LEN: usize = 150;

/// A single attributed quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Opaque identifier, unique within a collection.
    pub id: String,
    /// Quotation body.
    pub text: String,
    /// Person the quote is attributed to.
    pub author: String,
    /// Provenance of the quote.
    pub source: Source,
    /// Character count of `text`.
    pub length: usize,
    /// Free-form classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Extension attributes. Not covered by validation.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// When the quote entered the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    /// Provider-defined popularity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    /// Whether the attribution has been checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Quote {
    /// Creates a quote with `length` computed from `text`.
    ///
    /// The result is not validated; call [`Quote::validate`] when the input
    /// comes from outside the program.
    pub fn new(id: &str, text: &str, author: &str, source: Source) -> Self {
        Quote {
            id: String::from(id),
            text: String::from(text),
            author: String::from(author),
            source,
            length: text.chars().count(),
            category: None,
            tags: BTreeSet::new(),
            date_added: None,
            popularity: None,
            verified: None,
        }
    }

    /// Sets the category.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(String::from(category));
        self
    }

    /// Replaces the tag set.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the date the quote was added.
    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    /// Sets the popularity score.
    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Sets the verified flag.
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    /// Checks the quote invariants and returns the first violation found.
    ///
    /// - id is not blank
    /// - `length` equals the character count of `text`
    /// - text length is within `MIN_TEXT_LEN..=MAX_TEXT_LEN`
    /// - author is not blank
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.id.trim().is_empty() {
            return Err(QuoteError::BlankId);
        }

        let actual = self.text.chars().count();
        if self.length != actual {
            return Err(QuoteError::LengthMismatch {
                id: self.id.clone(),
                stored: self.length,
                actual,
            });
        }

        if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&actual) {
            return Err(QuoteError::TextLength {
                id: self.id.clone(),
                length: actual,
                min: MIN_TEXT_LEN,
                max: MAX_TEXT_LEN,
            });
        }

        if self.author.trim().is_empty() {
            return Err(QuoteError::BlankAuthor(self.id.clone()));
        }
        Ok(())
    }

    /// Attribution line shown under the quote text.
    pub fn attribution(&self) -> String {
        format!("— {}", self.author.trim())
    }

    /// Case-insensitive category match. Quotes without a category never match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category.trim()))
    }
}

/// Validates every quote in `quotes` and checks that ids are unique.
pub fn validate_collection(quotes: &[Quote]) -> Result<(), QuoteError> {
    let mut seen = HashSet::with_capacity(quotes.len());
    for quote in quotes {
        quote.validate()?;
        if !seen.insert(quote.id.as_str()) {
            return Err(QuoteError::DuplicateId(quote.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quote {
        Quote::new(
            "q-1",
            "Stay hungry, stay foolish.",
            "Steve Jobs",
            Source::Quotable,
        )
    }

    #[test]
    fn test_new_counts_characters_not_bytes() {
        let quote = Quote::new("q-2", "Ça ira, ça ira, ça ira.", "Unknown", Source::Local);
        assert_eq!(quote.length, 23);
        assert!(quote.text.len() > quote.length);
        assert!(quote.validate().is_ok());
    }

    #[test]
    fn test_valid_quote_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_text_length_bounds_are_inclusive() {
        let shortest = Quote::new("a", &"x".repeat(MIN_TEXT_LEN), "A", Source::Local);
        let longest = Quote::new("b", &"x".repeat(MAX_TEXT_LEN), "A", Source::Local);
        assert!(shortest.validate().is_ok());
        assert!(longest.validate().is_ok());

        let too_short = Quote::new("c", &"x".repeat(MIN_TEXT_LEN - 1), "A", Source::Local);
        let too_long = Quote::new("d", &"x".repeat(MAX_TEXT_LEN + 1), "A", Source::Local);
        assert!(matches!(
            too_short.validate(),
            Err(QuoteError::TextLength { length: 9, .. })
        ));
        assert!(matches!(
            too_long.validate(),
            Err(QuoteError::TextLength { length: 151, .. })
        ));
    }

    #[test]
    fn test_length_must_match_text() {
        let mut quote = sample();
        quote.length += 1;
        assert!(matches!(
            quote.validate(),
            Err(QuoteError::LengthMismatch { stored: 27, actual: 26, .. })
        ));
    }

    #[test]
    fn test_whitespace_author_is_rejected() {
        let quote = Quote::new("q-3", "Simplicity is prerequisite.", "   ", Source::Local);
        assert!(matches!(quote.validate(), Err(QuoteError::BlankAuthor(id)) if id == "q-3"));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let quote = Quote::new(" ", "Simplicity is prerequisite.", "Dijkstra", Source::Local);
        assert!(matches!(quote.validate(), Err(QuoteError::BlankId)));
    }

    #[test]
    fn test_collection_rejects_duplicate_ids() {
        let quotes = vec![sample(), sample()];
        assert!(matches!(
            validate_collection(&quotes),
            Err(QuoteError::DuplicateId(id)) if id == "q-1"
        ));
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["source"], "quotable");
        assert_eq!(object["length"], 26);
    }

    #[test]
    fn test_extension_fields_use_camel_case() {
        let added = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let quote = sample()
            .with_category("motivation")
            .with_tags(["life", "work"])
            .with_date_added(added)
            .with_popularity(0.75)
            .with_verified(true);

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["category"], "motivation");
        assert_eq!(json["tags"], serde_json::json!(["life", "work"]));
        assert!(json.get("dateAdded").is_some());
        assert_eq!(json["verified"], true);

        let parsed: Quote = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, quote);
    }

    #[test]
    fn test_in_category_ignores_case() {
        let quote = sample().with_category("Motivation");
        assert!(quote.in_category("motivation"));
        assert!(!quote.in_category("wisdom"));
        assert!(!sample().in_category("motivation"));
    }

    #[test]
    fn test_attribution_trims_author() {
        let quote = Quote::new("q-4", "Well done is better than well said.", " Ben Franklin ", Source::Local);
        assert_eq!(quote.attribution(), "— Ben Franklin");
    }
}
