//! Document metadata recognised at the top of a wireframe

use serde::Serialize;
use std::collections::BTreeMap;

/// Recognised metadata keys
///
/// Keys are matched against the start of a trimmed line followed by a colon,
/// e.g. `Title: Sign in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKey {
    Title,
    Url,
    PageLanguage,
    PagePurpose,
    /// Short form of `Page Purpose:`
    Purpose,
    Referrer,
    Regions,
    InteractiveElements,
}

/// Line prefixes in match order, paired with the key they produce
const PREFIXES: &[(&str, MetadataKey)] = &[
    ("Title:", MetadataKey::Title),
    ("URL:", MetadataKey::Url),
    ("Page language:", MetadataKey::PageLanguage),
    ("Page Purpose:", MetadataKey::PagePurpose),
    ("Page purpose:", MetadataKey::PagePurpose),
    ("Purpose:", MetadataKey::Purpose),
    ("Referrer:", MetadataKey::Referrer),
    ("Regions:", MetadataKey::Regions),
    ("Interactive Elements:", MetadataKey::InteractiveElements),
];

impl MetadataKey {
    /// Match a trimmed line against the metadata prefixes
    ///
    /// # Returns
    /// * `Some((key, value))` - The key and the trimmed remainder after the colon
    /// * `None` - The line is not a metadata line
    pub fn from_line(line: &str) -> Option<(Self, &str)> {
        PREFIXES.iter().find_map(|(prefix, key)| {
            line.strip_prefix(prefix)
                .map(|value| (*key, value.trim()))
        })
    }

    /// Whether the key is part of the metadata block checked by the validator
    ///
    /// The bare `Purpose:` form is accepted by the parser but is not a block
    /// key for highlighting or the single-block rule.
    pub fn is_block_key(self) -> bool {
        !matches!(self, MetadataKey::Purpose)
    }

    /// Canonical label as written in the DSL
    pub fn label(self) -> &'static str {
        match self {
            MetadataKey::Title => "Title",
            MetadataKey::Url => "URL",
            MetadataKey::PageLanguage => "Page language",
            MetadataKey::PagePurpose => "Page Purpose",
            MetadataKey::Purpose => "Purpose",
            MetadataKey::Referrer => "Referrer",
            MetadataKey::Regions => "Regions",
            MetadataKey::InteractiveElements => "Interactive Elements",
        }
    }
}

impl std::fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata values extracted from a wireframe
///
/// The first occurrence of a key wins. Repeated keys are kept out of the map
/// and left for the validator to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    entries: BTreeMap<MetadataKey, String>,
}

impl Metadata {
    /// Create an empty metadata map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value unless the key is already present
    ///
    /// # Returns
    /// * `true` - The value was stored
    /// * `false` - The key already had a value, which is kept
    pub fn insert(&mut self, key: MetadataKey, value: impl Into<String>) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value.into());
        true
    }

    pub fn get(&self, key: MetadataKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(MetadataKey::Title).filter(|t| !t.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.get(MetadataKey::Url)
    }

    /// Page purpose from either `Page Purpose:` or `Purpose:`
    pub fn purpose(&self) -> Option<&str> {
        self.get(MetadataKey::PagePurpose)
            .or_else(|| self.get(MetadataKey::Purpose))
            .filter(|p| !p.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (MetadataKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_recognises_keys() {
        assert_eq!(
            MetadataKey::from_line("Title: Sign in"),
            Some((MetadataKey::Title, "Sign in"))
        );
        assert_eq!(
            MetadataKey::from_line("URL:/login"),
            Some((MetadataKey::Url, "/login"))
        );
        assert_eq!(
            MetadataKey::from_line("Page Purpose: Let users sign in"),
            Some((MetadataKey::PagePurpose, "Let users sign in"))
        );
        assert_eq!(
            MetadataKey::from_line("Purpose: Checkout"),
            Some((MetadataKey::Purpose, "Checkout"))
        );
        assert_eq!(MetadataKey::from_line("Name: [____]"), None);
    }

    #[test]
    fn test_purpose_value_keeps_later_colons() {
        let (_, value) = MetadataKey::from_line("Purpose: Step 2: payment").unwrap();
        assert_eq!(value, "Step 2: payment");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut metadata = Metadata::new();
        assert!(metadata.insert(MetadataKey::Title, "First"));
        assert!(!metadata.insert(MetadataKey::Title, "Second"));
        assert_eq!(metadata.title(), Some("First"));
    }

    #[test]
    fn test_purpose_falls_back_to_short_form() {
        let mut metadata = Metadata::new();
        metadata.insert(MetadataKey::Purpose, "Short");
        assert_eq!(metadata.purpose(), Some("Short"));

        metadata.insert(MetadataKey::PagePurpose, "Long");
        assert_eq!(metadata.purpose(), Some("Long"));
    }

    #[test]
    fn test_bare_purpose_is_not_block_key() {
        assert!(MetadataKey::Title.is_block_key());
        assert!(MetadataKey::InteractiveElements.is_block_key());
        assert!(!MetadataKey::Purpose.is_block_key());
    }
}
