//! Quote Display — the display layer of the quote app.
//!
//! Renders a quote taken from a saved `ApiResponse` (or from the built-in
//! fallback dataset when no response is given), renders the loading indicator
//! shown while a response is pending, and validates quote collections.
//!
//! Usage example (CLI):
//! ```bash
//! quote_display quote --response ./response.json
//! quote_display quote --category action
//! quote_display loading --size large --message "Loading data..." --variant dots
//! quote_display validate ./quotes.json
//! ```
#![warn(missing_docs)]
mod args;
mod card;

use crate::args::{Args, Command};
use crate::card::response_card;
use chrono::Utc;
use clap::Parser;
use log::{debug, info, warn};
use quote_common::quote::validate_collection;
use quote_common::{ApiResponse, Quote, QuoteError, Result, local};
use quote_indicator::{Indicator, IndicatorProps};
use std::fs;
use std::path::Path;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    match args.command {
        Command::Quote {
            response,
            category,
            json,
        } => show_quote(response.as_deref(), category.as_deref(), json),
        Command::Loading {
            size,
            color,
            message,
            no_message,
            inline,
            variant,
            decorative,
            json,
        } => {
            let mut props = IndicatorProps {
                size,
                color,
                inline,
                variant,
                decorative,
                ..IndicatorProps::default()
            };
            if no_message {
                props = props.no_message();
            } else if let Some(message) = message {
                props = props.message(&message);
            }
            show_loading(&props, json)
        }
        Command::Validate { path } => validate_file(&path),
    }
}

fn show_quote(path: Option<&Path>, category: Option<&str>, json: bool) -> Result<()> {
    let response = match path {
        Some(path) => {
            info!("Reading response from {}", path.display());
            ApiResponse::from_json(&fs::read_to_string(path)?)?
        }
        None => {
            info!("No response given, using the local dataset");
            local::local_response(category)?
        }
    };

    report_rate_limit(&response);

    if json {
        println!("{}", response.to_json()?);
    } else {
        println!("{}", response_card(&response));
    }
    Ok(())
}

fn show_loading(props: &IndicatorProps, json: bool) -> Result<()> {
    debug!("Indicator props: {:?}", props);
    let indicator = Indicator::render(props);
    if json {
        println!("{}", serde_json::to_string_pretty(&indicator)?);
    } else {
        println!("{}", indicator.to_html());
    }
    Ok(())
}

fn validate_file(path: &Path) -> Result<()> {
    let quotes: Vec<Quote> = serde_json::from_str(&fs::read_to_string(path)?)?;
    validate_collection(&quotes)?;
    info!("{}: {} valid quotes", path.display(), quotes.len());
    println!("OK: {} quotes", quotes.len());
    Ok(())
}

fn report_rate_limit(response: &ApiResponse) {
    if !response.source().is_remote() {
        debug!("Local response, no provider quota involved");
        return;
    }
    let rate_limit = response.rate_limit();
    if rate_limit.is_exhausted() {
        match rate_limit.reset_at() {
            Some(reset_at) => warn!(
                "Provider quota exhausted, resets in {}s",
                (reset_at - Utc::now()).num_seconds().max(0)
            ),
            None => warn!("Provider quota exhausted"),
        }
    } else {
        info!(
            "{} requests remaining: {}",
            response.source(),
            rate_limit.remaining
        );
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
