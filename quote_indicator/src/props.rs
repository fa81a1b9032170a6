//! Loading indicator inputs and their normalization.
//!
//! Every input is independently optional. Raw values that are not part of an
//! enumerated domain are treated as absent and fall back to the default; they
//! are logged at `debug` level and never reported as errors.

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Message shown when the caller does not provide one.
pub const DEFAULT_MESSAGE: &str = "Loading...";

/// Visual weight of the indicator.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
    Xl,
}

/// Color of the icon and the message.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Red,
    Gray,
}

/// Animation style of the icon.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    #[default]
    Spinner,
    Outline,
    Dots,
    Bars,
}

/// Raw indicator configuration as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorProps {
    /// One of `small`, `medium`, `large`, `xl`.
    pub size: Option<String>,
    /// One of `blue`, `green`, `red`, `gray`.
    pub color: Option<String>,
    /// Text shown next to the icon. `None` or empty hides the message.
    pub message: Option<String>,
    /// Horizontal, tightly spaced layout.
    pub inline: bool,
    /// One of `spinner`, `outline`, `dots`, `bars`.
    pub variant: Option<String>,
    /// Hide the icon from assistive technology.
    pub decorative: bool,
}

impl Default for IndicatorProps {
    fn default() -> Self {
        IndicatorProps {
            size: None,
            color: None,
            message: Some(String::from(DEFAULT_MESSAGE)),
            inline: false,
            variant: None,
            decorative: false,
        }
    }
}

impl IndicatorProps {
    /// Sets the raw size value.
    pub fn size(mut self, size: &str) -> Self {
        self.size = Some(String::from(size));
        self
    }

    /// Sets the raw color value.
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(String::from(color));
        self
    }

    /// Sets the message text.
    pub fn message(mut self, message: &str) -> Self {
        self.message = Some(String::from(message));
        self
    }

    /// Removes the message.
    pub fn no_message(mut self) -> Self {
        self.message = None;
        self
    }

    /// Enables or disables the inline layout.
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Sets the raw variant value.
    pub fn variant(mut self, variant: &str) -> Self {
        self.variant = Some(String::from(variant));
        self
    }

    /// Marks the icon as decorative.
    pub fn decorative(mut self, decorative: bool) -> Self {
        self.decorative = decorative;
        self
    }

    /// Applies defaults and fallbacks, producing fully typed settings.
    ///
    /// The inline layout lowers the default size to `small`; a recognized
    /// `size` always wins.
    pub fn resolve(&self) -> ResolvedProps {
        let default_size = if self.inline { Size::Small } else { Size::default() };
        let message = self
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(String::from);

        ResolvedProps {
            size: parse_or_default(self.size.as_deref(), "size", default_size),
            color: parse_or_default(self.color.as_deref(), "color", Color::default()),
            message,
            inline: self.inline,
            variant: parse_or_default(self.variant.as_deref(), "variant", Variant::default()),
            decorative: self.decorative,
        }
    }
}

/// Indicator settings after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProps {
    /// Effective size.
    pub size: Size,
    /// Effective color.
    pub color: Color,
    /// Non-empty message, if any.
    pub message: Option<String>,
    /// Inline layout flag.
    pub inline: bool,
    /// Effective variant.
    pub variant: Variant,
    /// Decorative icon flag.
    pub decorative: bool,
}

fn parse_or_default<T>(raw: Option<&str>, field: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match raw {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            debug!("Unrecognized {} {:?}, using default", field, value);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults() {
        let resolved = IndicatorProps::default().resolve();
        assert_eq!(resolved.size, Size::Medium);
        assert_eq!(resolved.color, Color::Blue);
        assert_eq!(resolved.variant, Variant::Spinner);
        assert_eq!(resolved.message.as_deref(), Some(DEFAULT_MESSAGE));
        assert!(!resolved.inline);
        assert!(!resolved.decorative);
    }

    #[test]
    fn test_every_tag_parses_to_itself() {
        for size in Size::iter() {
            assert_eq!(IndicatorProps::default().size(&size.to_string()).resolve().size, size);
        }
        for color in Color::iter() {
            assert_eq!(IndicatorProps::default().color(&color.to_string()).resolve().color, color);
        }
        for variant in Variant::iter() {
            assert_eq!(
                IndicatorProps::default().variant(&variant.to_string()).resolve().variant,
                variant
            );
        }
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        let resolved = IndicatorProps::default()
            .size("huge")
            .color("purple")
            .variant("wave")
            .resolve();
        assert_eq!(resolved.size, Size::Medium);
        assert_eq!(resolved.color, Color::Blue);
        assert_eq!(resolved.variant, Variant::Spinner);
    }

    #[test]
    fn test_matching_is_exact_lowercase() {
        let resolved = IndicatorProps::default().size("LARGE").color(" red").resolve();
        assert_eq!(resolved.size, Size::Medium);
        assert_eq!(resolved.color, Color::Blue);
    }

    #[test]
    fn test_inline_defaults_to_small_unless_size_given() {
        assert_eq!(IndicatorProps::default().inline(true).resolve().size, Size::Small);
        assert_eq!(
            IndicatorProps::default().inline(true).size("large").resolve().size,
            Size::Large
        );
        assert_eq!(
            IndicatorProps::default().inline(true).size("bogus").resolve().size,
            Size::Small
        );
    }

    #[test]
    fn test_empty_or_missing_message_is_dropped() {
        assert_eq!(IndicatorProps::default().message("").resolve().message, None);
        assert_eq!(IndicatorProps::default().no_message().resolve().message, None);
        assert_eq!(
            IndicatorProps::default().message("Fetching quote").resolve().message.as_deref(),
            Some("Fetching quote")
        );
    }

    #[test]
    fn test_props_deserialize_with_defaults() {
        let props: IndicatorProps = serde_json::from_str(r#"{"size":"xl","inline":true}"#).unwrap();
        assert_eq!(props.message.as_deref(), Some(DEFAULT_MESSAGE));
        let resolved = props.resolve();
        assert_eq!(resolved.size, Size::Xl);
        assert!(resolved.inline);

        let props: IndicatorProps = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert_eq!(props.resolve().message, None);
    }
}
