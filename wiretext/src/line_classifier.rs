//! Line classification for syntax highlighting
//!
//! Every line falls into one of five visual categories. Classification is a
//! pure per-line function; the regex engine keeps each test linear in the
//! line length.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Visual category of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Metadata block keys (`Title:`, `URL:`, ...)
    Metadata,
    /// Headings and landmarks
    Structure,
    /// Region tags, layout directives and rules
    Layout,
    /// Buttons, links, images, form fields and bullets
    Interaction,
    /// Anything else
    Default,
}

impl Category {
    /// CSS class used by the highlight layer
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Metadata => "hl-metadata",
            Category::Structure => "hl-structure",
            Category::Layout => "hl-layout",
            Category::Interaction => "hl-interaction",
            Category::Default => "hl-default",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Metadata => "metadata",
            Category::Structure => "structure",
            Category::Layout => "layout",
            Category::Interaction => "interaction",
            Category::Default => "default",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static METADATA_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Title|URL|Page language|Page Purpose|Page purpose|Referrer|Regions|Interactive Elements):",
    )
    .expect("METADATA_LINE_REGEX: invalid regex pattern")
});

/// Category patterns in precedence order; metadata is tested separately first
static CATEGORY_RULES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    [
        (Category::Structure, r"^(#|\|\|)"),
        (
            Category::Layout,
            r"(\[.*?\s+(Start|End)\]|\[2 Columns\]|\[Sidebar\]|\[Card/Block\]|---)",
        ),
        (
            Category::Interaction,
            r"(\[\[.*\]\]|\[.*?\]|<.*?>|\w+:\s*\[|^\s+_+\s*$|^\s+_+\]|^\*\s)",
        ),
    ]
    .into_iter()
    .map(|(category, pattern)| {
        let regex = Regex::new(pattern).expect("CATEGORY_RULES: invalid regex pattern");
        (category, regex)
    })
    .collect()
});

/// Whether a raw line opens with a metadata block key
pub fn is_metadata_line(line: &str) -> bool {
    METADATA_LINE_REGEX.is_match(line)
}

/// Classify a single raw line
///
/// First match wins: metadata, then structure, layout, interaction.
pub fn classify_line(line: &str) -> Category {
    if is_metadata_line(line) {
        return Category::Metadata;
    }
    CATEGORY_RULES
        .iter()
        .find(|(_, regex)| regex.is_match(line))
        .map_or(Category::Default, |(category, _)| *category)
}

/// Classify every line of a document
///
/// # Returns
/// * `Vec<(usize, Category)>` - 1-based line numbers with their category
pub fn classify_document(text: &str) -> Vec<(usize, Category)> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, classify_line(line.trim_end_matches('\r'))))
        .collect()
}

/// Render the highlight layer markup for a document
///
/// One `<span>` per line, joined by newlines. Empty lines become a single
/// space so that every line keeps its height.
pub fn highlight_html(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let line = line.trim_end_matches('\r');
            let shown = if line.is_empty() { " " } else { line };
            format!(
                "<span class=\"{}\">{}</span>",
                classify_line(line).css_class(),
                escape_html(shown)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_lines() {
        assert_eq!(classify_line("Title: Home"), Category::Metadata);
        assert_eq!(classify_line("Page purpose: Browse"), Category::Metadata);
        assert_eq!(classify_line("Interactive Elements: 4"), Category::Metadata);
        // Bare purpose is not a block key
        assert_ne!(classify_line("Purpose: Browse"), Category::Metadata);
        // Keys must start the line
        assert_ne!(classify_line(" Title: Home"), Category::Metadata);
    }

    #[test]
    fn test_structure_lines() {
        assert_eq!(classify_line("# Welcome"), Category::Structure);
        assert_eq!(classify_line("###### Small print"), Category::Structure);
        assert_eq!(classify_line("|| Navigation"), Category::Structure);
    }

    #[test]
    fn test_layout_lines() {
        assert_eq!(classify_line("[Header Start]"), Category::Layout);
        assert_eq!(classify_line("[Main Content End]"), Category::Layout);
        assert_eq!(classify_line("[2 Columns]"), Category::Layout);
        assert_eq!(classify_line("[Sidebar]"), Category::Layout);
        assert_eq!(classify_line("[Card/Block]"), Category::Layout);
        assert_eq!(classify_line("---"), Category::Layout);
    }

    #[test]
    fn test_interaction_lines() {
        assert_eq!(classify_line("[[Submit]]"), Category::Interaction);
        assert_eq!(classify_line("See [pricing](/pricing)"), Category::Interaction);
        assert_eq!(classify_line("<Hero image>"), Category::Interaction);
        assert_eq!(classify_line("Email: [____]"), Category::Interaction);
        assert_eq!(classify_line("   ______"), Category::Interaction);
        assert_eq!(classify_line("* Bullet"), Category::Interaction);
    }

    #[test]
    fn test_structure_beats_interaction() {
        assert_eq!(classify_line("# [Linked heading]"), Category::Structure);
    }

    #[test]
    fn test_default_lines() {
        assert_eq!(classify_line("Plain words"), Category::Default);
        assert_eq!(classify_line(""), Category::Default);
        assert_eq!(classify_line("- dash bullet"), Category::Default);
    }

    #[test]
    fn test_classify_document_numbers_lines() {
        let classified = classify_document("Title: A\n\n# A");

        assert_eq!(
            classified,
            vec![
                (1, Category::Metadata),
                (2, Category::Default),
                (3, Category::Structure)
            ]
        );
    }

    #[test]
    fn test_highlight_html_escapes_and_pads_empty_lines() {
        let html = highlight_html("<Logo>\n\nA & B");

        assert_eq!(
            html,
            "<span class=\"hl-interaction\">&lt;Logo&gt;</span>\n\
             <span class=\"hl-default\"> </span>\n\
             <span class=\"hl-default\">A &amp; B</span>"
        );
    }
}
