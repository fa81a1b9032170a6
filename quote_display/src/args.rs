//! Command-line arguments for the quote display.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a quote from a saved API response, or from the local dataset.
    Quote {
        /// Path to a JSON-encoded `ApiResponse`. Without it a local quote is shown.
        #[clap(long)]
        response: Option<PathBuf>,

        /// Restrict local quotes to this category.
        #[clap(long, conflicts_with = "response")]
        category: Option<String>,

        /// Print the response as JSON instead of the quote card.
        #[clap(long)]
        json: bool,
    },

    /// Render the loading indicator markup.
    Loading {
        /// small, medium, large or xl. Other values fall back to the default.
        #[clap(long)]
        size: Option<String>,

        /// blue, green, red or gray. Other values fall back to blue.
        #[clap(long)]
        color: Option<String>,

        /// Message shown next to the icon.
        #[clap(long)]
        message: Option<String>,

        /// Hide the message.
        #[clap(long, conflicts_with = "message")]
        no_message: bool,

        /// Use the horizontal layout.
        #[clap(long)]
        inline: bool,

        /// spinner, outline, dots or bars. Other values fall back to spinner.
        #[clap(long)]
        variant: Option<String>,

        /// Hide the icon from assistive technology.
        #[clap(long)]
        decorative: bool,

        /// Print the attribute tree as JSON instead of HTML.
        #[clap(long)]
        json: bool,
    },

    /// Validate a JSON array of quotes.
    Validate {
        /// Path to the quotes file.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_conflicts_with_response() {
        let parsed = Args::try_parse_from([
            "quote_display",
            "quote",
            "--response",
            "response.json",
            "--category",
            "action",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_category_alone_is_accepted() {
        let args = Args::try_parse_from(["quote_display", "quote", "--category", "action"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Quote { response: None, category: Some(c), json: false } if c == "action"
        ));
    }
}
