//! Source model for wireframe documents
//!
//! This module defines the structural representation produced by parsing
//! DSL text: document metadata plus an ordered element tree. Both the
//! validator's callers and the SVG exporter consume it.

// Submodules
mod element;
mod grammar;
mod metadata;
mod parser;

// Re-export public types
pub use element::Element;
pub use grammar::{match_line, LineMatch, LineRule};
pub(crate) use grammar::LINK_REGEX;
pub use metadata::{Metadata, MetadataKey};
pub use parser::WireframeParser;

use serde::Serialize;

/// A parsed wireframe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WireframeDocument {
    /// Metadata from `Key: value` lines
    pub metadata: Metadata,

    /// Top-level elements in source order; landmarks own their children
    pub elements: Vec<Element>,
}

impl WireframeDocument {
    /// Total number of elements, landmarks and their children included
    pub fn element_count(&self) -> usize {
        self.elements
            .iter()
            .map(|e| 1 + e.children().len())
            .sum()
    }

    /// Number of elements produced from source lines (landmarks excluded)
    pub fn leaf_count(&self) -> usize {
        self.iter_leaves().count()
    }

    /// Iterate all non-landmark elements in reading order
    pub fn iter_leaves(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().flat_map(|element| match element {
            Element::Landmark { children, .. } => children.iter().collect::<Vec<_>>(),
            other => vec![other],
        })
    }

    /// Headings as `(level, text)` pairs in reading order
    pub fn headings(&self) -> Vec<(u8, &str)> {
        self.iter_leaves()
            .filter_map(|element| match element {
                Element::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Names of all landmarks in source order
    pub fn landmark_names(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Landmark { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Parse wireframe text
///
/// Convenience wrapper around [`WireframeParser::parse`].
pub fn parse(text: &str) -> WireframeDocument {
    WireframeParser::parse(text)
}
