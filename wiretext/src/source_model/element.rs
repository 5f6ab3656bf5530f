//! Structural elements of a wireframe
//!
//! This module defines the element tree produced by the parser: a flat
//! top-level sequence where landmarks own the elements that follow them.

use serde::Serialize;

/// A single wireframe element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A heading written with `#` markers
    Heading {
        /// Heading level (1 = h1, 2 = h2, etc.)
        level: u8,
        /// Heading text without the markers
        text: String,
    },

    /// An action written as `[[Label]]`
    Button { text: String },

    /// An image placeholder written as `<Description>`
    Image { description: String },

    /// A form field written as `Label: [____]`
    Input { label: String },

    /// A link written as `[Text]` or `[Text](url)`
    Link {
        text: String,
        /// Destination, `None` when the link is undefined
        url: Option<String>,
    },

    /// Any line that matches no other rule
    Text { content: String },

    /// A bullet written with `* ` or `- `
    ListItem { content: String },

    /// A horizontal rule (`---` or `***`)
    Divider,

    /// A named region opened with `|| Name`
    ///
    /// Landmarks are the only containers and never contain other landmarks.
    Landmark {
        name: String,
        children: Vec<Element>,
    },

    /// A "skip to main content" link
    SkipLink { text: String },
}

impl Element {
    /// Child elements of a landmark, empty for every other element
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Landmark { children, .. } => children,
            _ => &[],
        }
    }
}
