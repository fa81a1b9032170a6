//! Outcome envelope for a single fetch attempt.
//!
//! `ApiResponse` holds either a `Quote` or a human-readable error, together with
//! the provenance tag and the provider's rate-limit state at response time.
//! The success/failure split is an enum, so a response can never carry both a
//! quote and an error. On the wire it keeps the flat shape
//! `{success, data, error, source, rateLimit}` consumed by the display layer;
//! parsing rejects shapes where those fields disagree, quotes that fail
//! validation, and envelopes whose source differs from the quote's.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::quote::Quote;
use crate::source::Source;

/// Error text used when a failure is reported without a message.
pub const DEFAULT_ERROR: &str = "Failed to fetch quote";

/// Quota state of the originating provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    /// Requests left in the current window.
    pub remaining: u32,
    /// End of the current window, milliseconds since the Unix epoch.
    pub reset_time: i64,
}

impl RateLimit {
    /// Creates a rate-limit record.
    pub fn new(remaining: u32, reset_time: i64) -> Self {
        RateLimit {
            remaining,
            reset_time,
        }
    }

    /// Rate limit for responses that never touched a provider.
    pub fn unlimited() -> Self {
        RateLimit::new(u32::MAX, Utc::now().timestamp_millis())
    }

    /// True when no requests are left in the current window.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Window end as a UTC timestamp, `None` if out of chrono's range.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.reset_time)
    }
}

/// Result of a fetch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A quote was obtained.
    Success(Quote),
    /// The attempt failed with a human-readable reason.
    Failure(String),
}

/// Success/failure envelope produced once per fetch attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireResponse", into = "WireResponse")]
pub struct ApiResponse {
    outcome: Outcome,
    source: Source,
    rate_limit: RateLimit,
}

impl ApiResponse {
    /// Successful response. The provenance is taken from the quote.
    pub fn success(quote: Quote, rate_limit: RateLimit) -> Self {
        ApiResponse {
            source: quote.source,
            outcome: Outcome::Success(quote),
            rate_limit,
        }
    }

    /// Failed response. A blank `error` is replaced with [`DEFAULT_ERROR`].
    pub fn failure(error: &str, source: Source, rate_limit: RateLimit) -> Self {
        let error = error.trim();
        let error = if error.is_empty() {
            warn!("Failure from {} reported without a message", source);
            String::from(DEFAULT_ERROR)
        } else {
            String::from(error)
        };
        ApiResponse {
            outcome: Outcome::Failure(error),
            source,
            rate_limit,
        }
    }

    /// True for a successful response.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// The quote, present only on success.
    pub fn data(&self) -> Option<&Quote> {
        match &self.outcome {
            Outcome::Success(quote) => Some(quote),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure reason, present only on failure.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// The underlying outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Provenance of the response.
    pub fn source(&self) -> Source {
        self.source
    }

    /// Provider quota at response time.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }

    /// Converts the envelope into the quote or the failure reason.
    pub fn into_result(self) -> Result<Quote, String> {
        match self.outcome {
            Outcome::Success(quote) => Ok(quote),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Encode the response to JSON.
    pub fn to_json(&self) -> Result<String, QuoteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a response from JSON, rejecting malformed envelopes.
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let wire: WireResponse = serde_json::from_str(json)?;
        ApiResponse::try_from(wire)
    }
}

/// Flat JSON shape of `ApiResponse`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    success: bool,
    data: Option<Quote>,
    error: Option<String>,
    source: Source,
    rate_limit: RateLimit,
}

impl TryFrom<WireResponse> for ApiResponse {
    type Error = QuoteError;

    fn try_from(wire: WireResponse) -> Result<Self, Self::Error> {
        let outcome = match (wire.success, wire.data, wire.error) {
            (true, Some(quote), None) => {
                quote.validate()?;
                if quote.source != wire.source {
                    return Err(QuoteError::MalformedResponse(format!(
                        "response source {} does not match quote source {}",
                        wire.source, quote.source
                    )));
                }
                Outcome::Success(quote)
            }
            (false, None, Some(error)) if !error.trim().is_empty() => Outcome::Failure(error),
            (true, None, _) => {
                return Err(QuoteError::MalformedResponse(String::from(
                    "success without data",
                )));
            }
            (true, Some(_), Some(_)) => {
                return Err(QuoteError::MalformedResponse(String::from(
                    "success with an error",
                )));
            }
            (false, Some(_), _) => {
                return Err(QuoteError::MalformedResponse(String::from(
                    "failure with data",
                )));
            }
            (false, None, _) => {
                return Err(QuoteError::MalformedResponse(String::from(
                    "failure without an error message",
                )));
            }
        };
        Ok(ApiResponse {
            outcome,
            source: wire.source,
            rate_limit: wire.rate_limit,
        })
    }
}

impl From<ApiResponse> for WireResponse {
    fn from(response: ApiResponse) -> Self {
        let (success, data, error) = match response.outcome {
            Outcome::Success(quote) => (true, Some(quote), None),
            Outcome::Failure(error) => (false, None, Some(error)),
        };
        WireResponse {
            success,
            data,
            error,
            source: response.source,
            rate_limit: response.rate_limit,
        }
    }
}
