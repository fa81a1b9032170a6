//! Plain-text rendering of quotes and failed responses.
use quote_common::{ApiResponse, Outcome, Quote};

/// Renders a quote as a small text card.
pub fn quote_card(quote: &Quote) -> String {
    let mut card = format!("\u{201c}{}\u{201d}\n  {}", quote.text, quote.attribution());
    if let Some(category) = &quote.category {
        card.push_str(&format!("\n  [{}] via {}", category, quote.source));
    } else {
        card.push_str(&format!("\n  via {}", quote.source));
    }
    card
}

/// Renders either the quote card or the failure reason.
pub fn response_card(response: &ApiResponse) -> String {
    match response.outcome() {
        Outcome::Success(quote) => quote_card(quote),
        Outcome::Failure(error) => format!("Could not load a quote from {}: {}", response.source(), error),
    }
}
