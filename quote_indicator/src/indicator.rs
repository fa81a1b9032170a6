//! The loading indicator.
//!
//! [`Indicator::render`] is a pure function of [`IndicatorProps`]: it holds no
//! state and has no side effects, so it can be re-evaluated on every input
//! change, from any thread, in any order. The result is a tree of
//! presentational attributes (CSS classes and ARIA attributes) that a host can
//! apply directly or turn into markup with [`Indicator::to_html`].

use std::time::Duration;

use serde::Serialize;

use crate::html::{escape, push_attr};
use crate::props::{Color, IndicatorProps, ResolvedProps, Size, Variant};

/// Accessible label used when no message is shown.
pub const DEFAULT_LABEL: &str = "Loading";
/// Number of segments of the `dots` variant.
pub const DOT_COUNT: usize = 3;
/// Number of segments of the `bars` variant.
pub const BAR_COUNT: usize = 4;
/// Animation offset between consecutive dots.
pub const DOT_DELAY_STEP: Duration = Duration::from_millis(100);

const BLOCK_LAYOUT: &str = "flex flex-col items-center justify-center gap-3 py-8";
const INLINE_LAYOUT: &str = "inline-flex flex-row items-center gap-2";

/// Rendered attributes of the whole indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    /// Container element.
    pub root: Root,
    /// Animated icon.
    pub icon: Icon,
    /// Message element; absent when there is no message.
    pub message: Option<Message>,
}

/// Container attributes. The container always announces busy state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Root {
    /// Layout classes.
    pub class: String,
    /// Always `status`.
    pub role: &'static str,
    /// Always `polite`.
    pub aria_live: &'static str,
    /// Always true.
    pub aria_atomic: bool,
    /// Always true.
    pub aria_busy: bool,
    /// The message, or [`DEFAULT_LABEL`].
    pub aria_label: String,
}

/// Icon attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    /// Size, color and variant classes.
    pub class: String,
    /// Set for decorative indicators.
    pub aria_hidden: bool,
    /// Sub-elements of the `dots` and `bars` variants.
    pub segments: Vec<Segment>,
}

/// A single dot or bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Shape and animation classes.
    pub class: &'static str,
    /// Animation offset; only dots are staggered.
    pub delay: Option<Duration>,
}

/// Message attributes and text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Plain text, never interpreted as markup.
    pub text: String,
    /// Text size, color and line-break classes.
    pub class: String,
}

impl Size {
    /// Icon dimensions.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Size::Small => "h-4 w-4",
            Size::Medium => "h-6 w-6",
            Size::Large => "h-8 w-8",
            Size::Xl => "h-12 w-12",
        }
    }

    /// Message text weight.
    pub fn text_class(&self) -> &'static str {
        match self {
            Size::Small => "text-sm",
            Size::Medium => "text-base",
            Size::Large => "text-lg",
            Size::Xl => "text-xl",
        }
    }
}

impl Color {
    /// Class shared by the icon and the message.
    pub fn class(&self) -> &'static str {
        match self {
            Color::Blue => "text-blue-600",
            Color::Green => "text-green-600",
            Color::Red => "text-red-600",
            Color::Gray => "text-gray-600",
        }
    }
}

impl Variant {
    /// Animation classes of the icon element.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Variant::Spinner => {
                "animate-spin rounded-full border-2 border-current border-t-transparent"
            }
            Variant::Outline => "animate-spin rounded-full border-2 border-current opacity-75",
            Variant::Dots => "flex items-center justify-center gap-1",
            Variant::Bars => "flex items-end justify-center gap-1",
        }
    }

    fn segments(&self) -> Vec<Segment> {
        match self {
            Variant::Spinner | Variant::Outline => Vec::new(),
            Variant::Dots => (0..DOT_COUNT as u32)
                .map(|i| Segment {
                    class: "h-2 w-2 rounded-full bg-current animate-bounce",
                    delay: Some(DOT_DELAY_STEP * i),
                })
                .collect(),
            Variant::Bars => (0..BAR_COUNT)
                .map(|_| Segment {
                    class: "h-full w-1 bg-current animate-pulse",
                    delay: None,
                })
                .collect(),
        }
    }
}

impl Indicator {
    /// Maps raw inputs to presentational attributes.
    pub fn render(props: &IndicatorProps) -> Self {
        Self::from_resolved(&props.resolve())
    }

    /// Maps normalized inputs to presentational attributes.
    pub fn from_resolved(props: &ResolvedProps) -> Self {
        let color = props.color.class();
        let layout = if props.inline { INLINE_LAYOUT } else { BLOCK_LAYOUT };

        let root = Root {
            class: String::from(layout),
            role: "status",
            aria_live: "polite",
            aria_atomic: true,
            aria_busy: true,
            aria_label: props
                .message
                .clone()
                .unwrap_or_else(|| String::from(DEFAULT_LABEL)),
        };

        let icon = Icon {
            class: format!(
                "{} {} {}",
                props.size.icon_class(),
                color,
                props.variant.icon_class()
            ),
            aria_hidden: props.decorative,
            segments: props.variant.segments(),
        };

        let message = props.message.as_ref().map(|text| Message {
            text: text.clone(),
            class: format!("{} {} whitespace-pre-line", props.size.text_class(), color),
        });

        Indicator {
            root,
            icon,
            message,
        }
    }

    /// Renders the indicator as HTML. All text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div");
        push_attr(&mut out, "class", &self.root.class);
        push_attr(&mut out, "role", self.root.role);
        push_attr(&mut out, "aria-live", self.root.aria_live);
        push_attr(&mut out, "aria-atomic", bool_attr(self.root.aria_atomic));
        push_attr(&mut out, "aria-busy", bool_attr(self.root.aria_busy));
        push_attr(&mut out, "aria-label", &self.root.aria_label);
        out.push('>');

        out.push_str("<span");
        push_attr(&mut out, "class", &self.icon.class);
        if self.icon.aria_hidden {
            push_attr(&mut out, "aria-hidden", "true");
        }
        out.push('>');
        for segment in &self.icon.segments {
            out.push_str("<span");
            push_attr(&mut out, "class", segment.class);
            if let Some(delay) = segment.delay {
                let style = format!("animation-delay: {:.1}s", delay.as_secs_f64());
                push_attr(&mut out, "style", &style);
            }
            out.push_str("></span>");
        }
        out.push_str("</span>");

        if let Some(message) = &self.message {
            out.push_str("<p");
            push_attr(&mut out, "class", &message.class);
            out.push('>');
            out.push_str(&escape(&message.text));
            out.push_str("</p>");
        }

        out.push_str("</div>");
        out
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
