//! Search filter definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bing adult content filter setting, sent as the `adlt` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdultFilter {
    /// Filter adult content (default).
    #[default]
    On,
    /// Do not filter adult content.
    Off,
}

impl AdultFilter {
    /// Value for the `adlt` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            AdultFilter::On => "on",
            AdultFilter::Off => "off",
        }
    }
}

impl fmt::Display for AdultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Image style filter, sent as a `filterui` fragment in the `qft`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFilter {
    LineDrawing,
    Photo,
    Clipart,
    AnimatedGif,
    Transparent,
}

impl StyleFilter {
    /// Parse a user-facing shorthand. Unknown shorthand is `None`,
    /// never an error; the request is simply sent without a fragment.
    pub fn from_shorthand(shorthand: &str) -> Option<Self> {
        match shorthand {
            "line" | "linedrawing" => Some(StyleFilter::LineDrawing),
            "photo" => Some(StyleFilter::Photo),
            "clipart" => Some(StyleFilter::Clipart),
            "gif" | "animatedgif" => Some(StyleFilter::AnimatedGif),
            "transparent" => Some(StyleFilter::Transparent),
            _ => None,
        }
    }

    /// The `qft` fragment Bing expects for this style.
    pub fn query_fragment(&self) -> &'static str {
        match self {
            StyleFilter::LineDrawing => "+filterui:photo-linedrawing",
            StyleFilter::Photo => "+filterui:photo-photo",
            StyleFilter::Clipart => "+filterui:photo-clipart",
            StyleFilter::AnimatedGif => "+filterui:photo-animatedgif",
            StyleFilter::Transparent => "+filterui:photo-transparent",
        }
    }
}

impl fmt::Display for StyleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleFilter::LineDrawing => write!(f, "linedrawing"),
            StyleFilter::Photo => write!(f, "photo"),
            StyleFilter::Clipart => write!(f, "clipart"),
            StyleFilter::AnimatedGif => write!(f, "animatedgif"),
            StyleFilter::Transparent => write!(f, "transparent"),
        }
    }
}

impl FromStr for StyleFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StyleFilter::from_shorthand(&s.to_lowercase())
            .ok_or_else(|| format!("Unknown style filter: {}", s))
    }
}

/// Resolve an optional shorthand to its `qft` fragment.
/// Unrecognized or absent shorthand yields the empty fragment.
pub fn style_fragment(shorthand: Option<&str>) -> &'static str {
    shorthand
        .and_then(StyleFilter::from_shorthand)
        .map(|f| f.query_fragment())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_aliases() {
        assert_eq!(
            StyleFilter::from_shorthand("line"),
            Some(StyleFilter::LineDrawing)
        );
        assert_eq!(
            StyleFilter::from_shorthand("linedrawing"),
            Some(StyleFilter::LineDrawing)
        );
        assert_eq!(
            StyleFilter::from_shorthand("gif"),
            Some(StyleFilter::AnimatedGif)
        );
        assert_eq!(
            StyleFilter::from_shorthand("animatedgif"),
            Some(StyleFilter::AnimatedGif)
        );
    }

    #[test]
    fn test_unknown_shorthand_is_empty_fragment() {
        assert_eq!(StyleFilter::from_shorthand("watercolor"), None);
        assert_eq!(style_fragment(Some("watercolor")), "");
        assert_eq!(style_fragment(None), "");
    }

    #[test]
    fn test_fragments() {
        assert_eq!(
            style_fragment(Some("photo")),
            "+filterui:photo-photo"
        );
        assert_eq!(
            style_fragment(Some("transparent")),
            "+filterui:photo-transparent"
        );
        assert_eq!(
            style_fragment(Some("clipart")),
            "+filterui:photo-clipart"
        );
    }

    #[test]
    fn test_adult_filter_param() {
        assert_eq!(AdultFilter::On.as_param(), "on");
        assert_eq!(AdultFilter::Off.as_param(), "off");
    }
}
