//! Line-oriented wireframe parser
//!
//! Converts raw DSL text into a [`WireframeDocument`] in a single forward pass.

use super::element::Element;
use super::grammar::{match_line, LineMatch};
use super::metadata::Metadata;
use super::WireframeDocument;

/// Parser state for one run over a document
pub struct WireframeParser {
    /// Metadata entries collected so far
    metadata: Metadata,

    /// Completed top-level elements
    elements: Vec<Element>,

    /// Landmark currently receiving elements
    open_landmark: Option<LandmarkBuilder>,
}

/// Builder for a landmark whose children are still being collected
struct LandmarkBuilder {
    name: String,
    children: Vec<Element>,
}

impl LandmarkBuilder {
    fn build(self) -> Element {
        Element::Landmark {
            name: self.name,
            children: self.children,
        }
    }
}

impl WireframeParser {
    /// Create a new parser
    ///
    /// # Returns
    /// * `WireframeParser` - A new parser with empty state
    pub fn new() -> Self {
        Self {
            metadata: Metadata::new(),
            elements: Vec::new(),
            open_landmark: None,
        }
    }

    /// Parse wireframe text into a document
    ///
    /// # Parameters
    /// * `text` - Raw DSL text
    ///
    /// # Returns
    /// * `WireframeDocument` - Metadata plus the element tree. Never fails:
    ///   unrecognised lines become text elements.
    pub fn parse(text: &str) -> WireframeDocument {
        let mut parser = Self::new();

        for line in text.lines() {
            parser.process_line(line);
        }

        parser.finalize()
    }

    /// Process a single source line
    fn process_line(&mut self, line: &str) {
        let Some((_, matched)) = match_line(line) else {
            return;
        };

        match matched {
            LineMatch::Metadata { key, value } => {
                if !self.metadata.insert(key, value) {
                    log::debug!("Ignoring repeated metadata key {}", key);
                }
            }
            LineMatch::OpenLandmark { name } => {
                self.close_landmark();
                self.open_landmark = Some(LandmarkBuilder {
                    name,
                    children: Vec::new(),
                });
            }
            LineMatch::Elements(elements) => {
                for element in elements {
                    self.push_element(element);
                }
            }
        }
    }

    /// Append to the open landmark, or to the top level when none is open
    fn push_element(&mut self, element: Element) {
        match self.open_landmark.as_mut() {
            Some(landmark) => landmark.children.push(element),
            None => self.elements.push(element),
        }
    }

    fn close_landmark(&mut self) {
        if let Some(landmark) = self.open_landmark.take() {
            self.elements.push(landmark.build());
        }
    }

    /// Close any landmark left open at end of input
    fn finalize(mut self) -> WireframeDocument {
        self.close_landmark();

        let document = WireframeDocument {
            metadata: self.metadata,
            elements: self.elements,
        };
        log::debug!(
            "Parsed wireframe: {} metadata entries, {} elements",
            document.metadata.len(),
            document.element_count()
        );
        document
    }
}

impl Default for WireframeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_model::MetadataKey;

    #[test]
    fn test_parse_empty_content() {
        // Arrange: Empty string
        let text = "";

        // Act: Parse the wireframe
        let doc = WireframeParser::parse(text);

        // Assert: Nothing is produced
        assert!(doc.metadata.is_empty());
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn test_blank_lines_produce_no_elements() {
        // Arrange: Content separated by blank and whitespace-only lines
        let text = "# Title\n\n   \n\nSome text\n\n";

        // Act: Parse the wireframe
        let doc = WireframeParser::parse(text);

        // Assert: Only the two content lines produce elements
        assert_eq!(doc.elements.len(), 2);
    }

    #[test]
    fn test_metadata_block_is_extracted() {
        // Arrange: Leading metadata block
        let text = "Title: Sign in\nURL: /login\nPage language: en\n\n# Sign in";

        // Act: Parse the wireframe
        let doc = WireframeParser::parse(text);

        // Assert: Metadata is captured and does not become elements
        assert_eq!(doc.metadata.title(), Some("Sign in"));
        assert_eq!(doc.metadata.url(), Some("/login"));
        assert_eq!(doc.metadata.get(MetadataKey::PageLanguage), Some("en"));
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn test_landmarks_own_following_elements() {
        // Arrange: Two landmarks and a top-level heading before them
        let text = "# Shop\n|| Navigation\n[Home](/)\n[Cart](/cart)\n|| Main\n## Products\n[[Buy]]";

        // Act: Parse the wireframe
        let doc = WireframeParser::parse(text);

        // Assert: Heading at top level, then two landmarks with their children
        assert_eq!(doc.elements.len(), 3);
        assert!(matches!(doc.elements[0], Element::Heading { level: 1, .. }));
        match &doc.elements[1] {
            Element::Landmark { name, children } => {
                assert_eq!(name, "Navigation");
                assert_eq!(children.len(), 2);
            }
            other => panic!("Expected Landmark, got {other:?}"),
        }
        match &doc.elements[2] {
            Element::Landmark { name, children } => {
                assert_eq!(name, "Main");
                assert_eq!(
                    children,
                    &vec![
                        Element::Heading {
                            level: 2,
                            text: "Products".to_string()
                        },
                        Element::Button {
                            text: "Buy".to_string()
                        }
                    ]
                );
            }
            other => panic!("Expected Landmark, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_landmark_closes_at_end() {
        // Arrange: Landmark never followed by another
        let text = "|| Footer\nCopyright 2024";

        // Act: Parse the wireframe
        let doc = WireframeParser::parse(text);

        // Assert: Landmark is emitted with its child
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.elements[0].children().len(), 1);
    }

    #[test]
    fn test_empty_landmark_is_kept() {
        let doc = WireframeParser::parse("|| Banner\n|| Main\nHello");

        assert_eq!(doc.elements.len(), 2);
        assert!(doc.elements[0].children().is_empty());
        assert_eq!(doc.elements[1].children().len(), 1);
    }

    #[test]
    fn test_skip_link_nests_inside_open_landmark() {
        // Arrange: Skip link as the first child of a landmark
        let text = "|| Header\n[Skip to main content](#main)";

        // Act: Parse the wireframe
        let doc = WireframeParser::parse(text);

        // Assert: Skip link belongs to the landmark
        assert_eq!(
            doc.elements[0].children(),
            &[Element::SkipLink {
                text: "[Skip to main content](#main)".to_string()
            }]
        );
    }

    #[test]
    fn test_metadata_inside_landmark_is_not_an_element() {
        let doc = WireframeParser::parse("|| Main\nURL: /late\nBody");

        assert_eq!(doc.metadata.url(), Some("/late"));
        assert_eq!(doc.elements[0].children().len(), 1);
    }

    #[test]
    fn test_repeated_metadata_keeps_first_value() {
        let doc = WireframeParser::parse("Title: One\nbody\nTitle: Two");

        assert_eq!(doc.metadata.title(), Some("One"));
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = WireframeParser::parse("# Heading\r\n[[Go]]\r\n");

        assert_eq!(
            doc.elements,
            vec![
                Element::Heading {
                    level: 1,
                    text: "Heading".to_string()
                },
                Element::Button {
                    text: "Go".to_string()
                }
            ]
        );
    }
}
