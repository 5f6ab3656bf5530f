//! Diagnostic types for accessibility validation

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

/// An accessibility finding
///
/// The `Display` output is the user-facing diagnostic message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Finding {
    /// The first heading in the document is not level 1
    #[error("First heading should be H1 (found H{level} on line {line})")]
    FirstHeadingNotLevel1 {
        /// The level of the first heading
        level: u8,
        /// 1-based line of the first heading
        line: usize,
    },

    /// More than one level 1 heading
    #[error("Page should have only one H1 (found {count})")]
    MultipleLevel1Headings {
        /// Number of h1 headings found
        count: usize,
    },

    /// A heading is more than one level deeper than the heading before it
    #[error("Heading skips from H{from} to H{to} on line {line}")]
    HeadingLevelSkip {
        from: u8,
        to: u8,
        /// 1-based line of the deeper heading
        line: usize,
    },

    /// Metadata keys appear after content has started
    #[error("Page should have only one metadata block (found {count})")]
    MultipleMetadataBlocks { count: usize },

    /// The same link text and destination appear on several lines
    #[error(
        "Duplicate links detected: \"{text}\"{location} appears on lines {line_list}",
        location = url_suffix(.url),
        line_list = .lines.iter().join(", ")
    )]
    DuplicateLink {
        text: String,
        url: Option<String>,
        lines: Vec<usize>,
    },
}

fn url_suffix(url: &Option<String>) -> String {
    match url {
        Some(url) => format!(" → {}", url),
        None => String::new(),
    }
}

impl Finding {
    /// Stable rule identifier
    pub fn rule(&self) -> &'static str {
        match self {
            Finding::FirstHeadingNotLevel1 { .. } => "first_heading_not_level1",
            Finding::MultipleLevel1Headings { .. } => "multiple_level1_headings",
            Finding::HeadingLevelSkip { .. } => "heading_level_skip",
            Finding::MultipleMetadataBlocks { .. } => "multiple_metadata_blocks",
            Finding::DuplicateLink { .. } => "duplicate_link",
        }
    }
}

/// An advisory diagnostic with the source lines it refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What was found
    pub finding: Finding,

    /// 1-based line numbers the finding refers to (may be empty)
    pub lines: Vec<usize>,
}

impl Diagnostic {
    pub fn new(finding: Finding, lines: Vec<usize>) -> Self {
        Self { finding, lines }
    }

    /// Diagnostic without line references
    pub fn document_wide(finding: Finding) -> Self {
        Self::new(finding, Vec::new())
    }

    pub fn message(&self) -> String {
        self.finding.to_string()
    }

    pub fn rule(&self) -> &'static str {
        self.finding.rule()
    }

    pub fn lines(&self) -> &[usize] {
        &self.lines
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.finding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Finding::FirstHeadingNotLevel1 { level: 2, line: 4 }.to_string(),
            "First heading should be H1 (found H2 on line 4)"
        );
        assert_eq!(
            Finding::MultipleLevel1Headings { count: 3 }.to_string(),
            "Page should have only one H1 (found 3)"
        );
        assert_eq!(
            Finding::HeadingLevelSkip {
                from: 1,
                to: 3,
                line: 2
            }
            .to_string(),
            "Heading skips from H1 to H3 on line 2"
        );
        assert_eq!(
            Finding::MultipleMetadataBlocks { count: 2 }.to_string(),
            "Page should have only one metadata block (found 2)"
        );
    }

    #[test]
    fn test_duplicate_link_message_with_and_without_url() {
        let with_url = Finding::DuplicateLink {
            text: "Learn more".to_string(),
            url: Some("/docs".to_string()),
            lines: vec![3, 7],
        };
        assert_eq!(
            with_url.to_string(),
            "Duplicate links detected: \"Learn more\" → /docs appears on lines 3, 7"
        );

        let without_url = Finding::DuplicateLink {
            text: "Help".to_string(),
            url: None,
            lines: vec![1, 2, 9],
        };
        assert_eq!(
            without_url.to_string(),
            "Duplicate links detected: \"Help\" appears on lines 1, 2, 9"
        );
    }

    #[test]
    fn test_diagnostic_serializes_rule_tag() {
        let diagnostic = Diagnostic::document_wide(Finding::MultipleLevel1Headings { count: 2 });

        let json = serde_json::to_value(&diagnostic).unwrap();

        assert_eq!(json["finding"]["rule"], "multiple_level1_headings");
        assert_eq!(json["finding"]["count"], 2);
        assert_eq!(json["lines"], serde_json::json!([]));
    }
}
