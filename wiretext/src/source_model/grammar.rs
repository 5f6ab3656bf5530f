//! Line grammar of the wireframe DSL
//!
//! Each source line is tested against an ordered list of rules. The first
//! rule that matches decides what the line produces; later rules are never
//! consulted for that line.

use super::element::Element;
use super::metadata::MetadataKey;
use regex::Regex;
use std::sync::LazyLock;

static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+)").expect("HEADING_REGEX: invalid regex pattern")
});

static BUTTON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(.+?)\]\]").expect("BUTTON_REGEX: invalid regex pattern")
});

static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.+?)>").expect("IMAGE_REGEX: invalid regex pattern"));

static INPUT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:]+):\s*\[(_+)\]").expect("INPUT_REGEX: invalid regex pattern")
});

/// `[text]` or `[text](url)`, shared with the duplicate-link check
pub(crate) static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\](?:\(([^)]+)\))?").expect("LINK_REGEX: invalid regex pattern")
});

/// What a matched line contributes to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// A `Key: value` metadata entry
    Metadata { key: MetadataKey, value: String },
    /// Closes any open landmark and opens a new one
    OpenLandmark { name: String },
    /// One or more elements for the current container
    Elements(Vec<Element>),
}

/// A single grammar rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Metadata,
    Landmark,
    SkipLink,
    Heading,
    Buttons,
    Image,
    Input,
    Links,
    Divider,
    ListItem,
    Text,
}

impl LineRule {
    /// Rules in match priority order
    pub const PRIORITY: [LineRule; 11] = [
        LineRule::Metadata,
        LineRule::Landmark,
        LineRule::SkipLink,
        LineRule::Heading,
        LineRule::Buttons,
        LineRule::Image,
        LineRule::Input,
        LineRule::Links,
        LineRule::Divider,
        LineRule::ListItem,
        LineRule::Text,
    ];

    /// Test this rule alone against a trimmed, non-empty line
    pub fn apply(self, line: &str) -> Option<LineMatch> {
        match self {
            LineRule::Metadata => {
                MetadataKey::from_line(line).map(|(key, value)| LineMatch::Metadata {
                    key,
                    value: value.to_string(),
                })
            }
            LineRule::Landmark => line.strip_prefix("|| ").map(|name| LineMatch::OpenLandmark {
                name: name.to_string(),
            }),
            LineRule::SkipLink => line
                .to_lowercase()
                .contains("skip to main")
                .then(|| single(Element::SkipLink {
                    text: line.to_string(),
                })),
            LineRule::Heading => HEADING_REGEX.captures(line).map(|caps| {
                single(Element::Heading {
                    level: caps[1].len() as u8,
                    text: caps[2].to_string(),
                })
            }),
            LineRule::Buttons => {
                let buttons: Vec<Element> = BUTTON_REGEX
                    .captures_iter(line)
                    .map(|caps| Element::Button {
                        text: caps[1].to_string(),
                    })
                    .collect();
                (!buttons.is_empty()).then_some(LineMatch::Elements(buttons))
            }
            LineRule::Image => IMAGE_REGEX.captures(line).map(|caps| {
                single(Element::Image {
                    description: caps[1].to_string(),
                })
            }),
            LineRule::Input => INPUT_REGEX.captures(line).map(|caps| {
                single(Element::Input {
                    label: caps[1].trim().to_string(),
                })
            }),
            LineRule::Links => {
                // A line opening with a blank like `[___]` is a form field, not a link
                if line.starts_with("[_") {
                    return None;
                }
                let links: Vec<Element> = LINK_REGEX
                    .captures_iter(line)
                    .map(|caps| Element::Link {
                        text: caps[1].to_string(),
                        url: caps.get(2).map(|m| m.as_str().to_string()),
                    })
                    .collect();
                (!links.is_empty()).then_some(LineMatch::Elements(links))
            }
            LineRule::Divider => {
                matches!(line, "---" | "***").then(|| single(Element::Divider))
            }
            LineRule::ListItem => line
                .strip_prefix("* ")
                .or_else(|| line.strip_prefix("- "))
                .map(|content| {
                    single(Element::ListItem {
                        content: content.to_string(),
                    })
                }),
            LineRule::Text => (!line.is_empty()).then(|| {
                single(Element::Text {
                    content: line.to_string(),
                })
            }),
        }
    }
}

fn single(element: Element) -> LineMatch {
    LineMatch::Elements(vec![element])
}

/// Run the rules in priority order against one source line
///
/// The line is trimmed first. Blank lines match nothing.
///
/// # Returns
/// * `Some((rule, match))` - The first rule that matched and what it produced
/// * `None` - The line is blank
pub fn match_line(line: &str) -> Option<(LineRule, LineMatch)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    LineRule::PRIORITY
        .iter()
        .find_map(|rule| rule.apply(line).map(|m| (*rule, m)))
}
