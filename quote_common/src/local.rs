//! Built-in fallback dataset.
//!
//! Used when no remote provider is called. Every entry carries `Source::Local`.

use log::debug;
use rand::Rng;

use crate::error::QuoteError;
use crate::quote::Quote;
use crate::response::{ApiResponse, RateLimit};
use crate::source::Source;

/// (id, text, author, category)
const LOCAL_QUOTES: &[(&str, &str, &str, &str)] = &[
    ("local-1", "The only way to do great work is to love what you do.", "Steve Jobs", "motivation"),
    ("local-2", "It does not matter how slowly you go as long as you do not stop.", "Confucius", "perseverance"),
    ("local-3", "Believe you can and you're halfway there.", "Theodore Roosevelt", "motivation"),
    ("local-4", "Act as if what you do makes a difference. It does.", "William James", "motivation"),
    ("local-5", "What you get by achieving your goals is not as important as what you become by achieving your goals.", "Zig Ziglar", "success"),
    ("local-6", "The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt", "dreams"),
    ("local-7", "Well done is better than well said.", "Benjamin Franklin", "action"),
    ("local-8", "Knowing is not enough; we must apply.", "Johann Wolfgang von Goethe", "action"),
    ("local-9", "Our greatest glory is not in never falling, but in rising every time we fall.", "Confucius", "perseverance"),
    ("local-10", "The secret of getting ahead is getting started.", "Mark Twain", "action"),
    ("local-11", "Happiness is not something ready made. It comes from your own actions.", "Dalai Lama", "happiness"),
    ("local-12", "Start where you are. Use what you have. Do what you can.", "Arthur Ashe", "action"),
];

/// All quotes of the fallback dataset.
pub fn local_quotes() -> Vec<Quote> {
    LOCAL_QUOTES
        .iter()
        .map(|(id, text, author, category)| {
            Quote::new(id, text, author, Source::Local).with_category(category)
        })
        .collect()
}

/// Picks a random local quote, optionally restricted to `category`.
pub fn random_local_quote(category: Option<&str>) -> Result<Quote, QuoteError> {
    let mut candidates = local_quotes();
    if let Some(category) = category {
        candidates.retain(|quote| quote.in_category(category));
    }
    if candidates.is_empty() {
        return Err(QuoteError::NoQuoteFound(
            category.unwrap_or_default().to_string(),
        ));
    }

    let mut rng = rand::rng();
    let index = rng.random_range(0..candidates.len());
    debug!("Picked local quote {} of {}", index + 1, candidates.len());
    Ok(candidates.swap_remove(index))
}

/// Wraps a random local quote in a successful response.
pub fn local_response(category: Option<&str>) -> Result<ApiResponse, QuoteError> {
    let quote = random_local_quote(category)?;
    Ok(ApiResponse::success(quote, RateLimit::unlimited()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::validate_collection;

    #[test]
    fn test_dataset_satisfies_invariants() {
        let quotes = local_quotes();
        assert_eq!(quotes.len(), LOCAL_QUOTES.len());
        validate_collection(&quotes).unwrap();
        assert!(quotes.iter().all(|q| q.source == Source::Local));
    }

    #[test]
    fn test_random_quote_respects_category() {
        for _ in 0..20 {
            let quote = random_local_quote(Some("Perseverance")).unwrap();
            assert_eq!(quote.category.as_deref(), Some("perseverance"));
            assert_eq!(quote.author, "Confucius");
        }
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let err = random_local_quote(Some("cooking")).unwrap_err();
        assert!(matches!(err, QuoteError::NoQuoteFound(c) if c == "cooking"));
    }

    #[test]
    fn test_local_response_is_not_rate_limited() {
        let response = local_response(None).unwrap();
        assert!(response.is_success());
        assert_eq!(response.source(), Source::Local);
        assert!(!response.rate_limit().is_exhausted());
    }
}
