//! Export formatters and file naming
//!
//! Wraps wireframe text in a fixed instruction template for pasting into a
//! language model, and derives the filename a saved wireframe should get.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const LLM_TEMPLATE: &str = include_str!("export/llm_prompt.txt");
const PENPOT_TEMPLATE: &str = include_str!("export/penpot_prompt.txt");

static TITLE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Title:\s*(.+)$").expect("TITLE_LINE_REGEX: invalid regex pattern")
});

static NON_ALPHANUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("NON_ALPHANUMERIC_REGEX: invalid regex pattern")
});

/// Destination of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    /// DSL legend for a general-purpose language model
    Llm,
    /// Instructions for generating a Penpot design file
    Penpot,
}

impl ExportTarget {
    /// Instruction template placed ahead of the wireframe
    pub fn template(self) -> &'static str {
        match self {
            ExportTarget::Llm => LLM_TEMPLATE,
            ExportTarget::Penpot => PENPOT_TEMPLATE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportTarget::Llm => "llm",
            ExportTarget::Penpot => "penpot",
        }
    }
}

impl std::fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap wireframe text for an export target
///
/// The template and the text are joined by one blank line; the text itself
/// is passed through untouched.
pub fn wrap_for(target: ExportTarget, text: &str) -> String {
    format!("{}\n\n{}", target.template(), text)
}

/// Lower-case a name and collapse every run of other characters to `-`
pub fn slugify(name: &str) -> String {
    NON_ALPHANUMERIC_REGEX
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Value of the first `Title:` line, trimmed, if it is not blank
pub fn title_of(text: &str) -> Option<&str> {
    TITLE_LINE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty())
}

/// Filename a wireframe should be saved under
///
/// # Parameters
/// * `text` - Raw DSL text
/// * `today` - Date used when the text has no usable title
///
/// # Returns
/// * `String` - `<title-slug>.txt`, or `wireframe-YYYY-MM-DD.txt`
pub fn suggested_filename(text: &str, today: NaiveDate) -> String {
    let slug = title_of(text)
        .map(|title| slugify(title).trim_matches('-').to_string())
        .filter(|slug| !slug.is_empty());

    match slug {
        Some(slug) => format!("{slug}.txt"),
        None => format!("wireframe-{}.txt", today.format("%Y-%m-%d")),
    }
}

/// Everything needed to hand a wireframe to a file download or writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveRequest {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

impl SaveRequest {
    pub fn new(text: &str, today: NaiveDate) -> Self {
        Self {
            filename: suggested_filename(text, today),
            content: text.to_string(),
            mime_type: "text/plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_wrap_for_llm() {
        let wrapped = wrap_for(ExportTarget::Llm, "# Home");

        assert!(wrapped.starts_with("Introduction\n"));
        assert!(wrapped.contains("Legend / Patterns"));
        assert!(wrapped.ends_with("[__] Forms and labels\n\n\n\n# Home"));
    }

    #[test]
    fn test_wrap_for_penpot() {
        let wrapped = wrap_for(ExportTarget::Penpot, "# Home");

        assert!(wrapped.starts_with("You are an expert wireframe designer."));
        assert!(wrapped.contains("WCAG 2.2 AA"));
        assert!(wrapped.ends_with("## Wireframe to Convert:\n\n\n# Home"));
    }

    #[test]
    fn test_wrap_keeps_text_verbatim() {
        let text = "  odd   spacing \r\n\n";

        let wrapped = wrap_for(ExportTarget::Llm, text);

        assert!(wrapped.ends_with(text));
        assert_eq!(wrapped.len(), LLM_TEMPLATE.len() + 2 + text.len());
    }

    #[test]
    fn test_filename_from_title() {
        let text = "Title: My Great Page!\nURL: /great";

        assert_eq!(suggested_filename(text, date()), "my-great-page.txt");
    }

    #[test]
    fn test_filename_title_need_not_be_first_line() {
        let text = "# Heading\nTitle:   Contact Us  ";

        assert_eq!(suggested_filename(text, date()), "contact-us.txt");
    }

    #[test]
    fn test_filename_fallback_without_title() {
        assert_eq!(
            suggested_filename("# No metadata", date()),
            "wireframe-2024-03-07.txt"
        );
    }

    #[test]
    fn test_filename_fallback_when_slug_is_empty() {
        assert_eq!(
            suggested_filename("Title: ***", date()),
            "wireframe-2024-03-07.txt"
        );
    }

    #[test]
    fn test_save_request() {
        let request = SaveRequest::new("Title: Home", date());

        assert_eq!(request.filename, "home.txt");
        assert_eq!(request.content, "Title: Home");
        assert_eq!(request.mime_type, "text/plain");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sign Up / Log In"), "sign-up-log-in");
        assert_eq!(slugify("  Edge "), "-edge-");
    }
}
