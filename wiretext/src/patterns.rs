//! Pattern library
//!
//! Insertable DSL snippets grouped by category, plus a list of example
//! wireframes. A built-in library is compiled into the binary; other
//! libraries can be loaded from JSON or TOML files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Built-in library definition
const DEFAULT_LIBRARY: &str = include_str!("patterns/default.toml");

/// Example wireframes shipped with the built-in library (file, content)
const BUILTIN_EXAMPLES: &[(&str, &str)] = &[
    ("login.txt", include_str!("patterns/examples/login.txt")),
    ("home.txt", include_str!("patterns/examples/home.txt")),
];

/// A single insertable snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Text inserted into the wireframe
    pub syntax: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCategory {
    pub name: String,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
}

/// A named example wireframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleDocument {
    pub name: String,
    /// File reference, relative to the library
    pub file: String,
}

impl ExampleDocument {
    /// Content of this example when it ships with the binary
    pub fn builtin_content(&self) -> Option<&'static str> {
        BUILTIN_EXAMPLES
            .iter()
            .find(|(file, _)| *file == self.file)
            .map(|(_, content)| *content)
    }
}

/// Patterns by category, plus example documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternLibrary {
    #[serde(default)]
    pub categories: Vec<PatternCategory>,
    #[serde(default)]
    pub examples: Vec<ExampleDocument>,
}

/// Errors that can occur when loading a pattern library
#[derive(Error, Debug)]
pub enum PatternLibraryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported pattern library format: {0}")]
    UnsupportedFormat(String),
}

impl PatternLibrary {
    /// The library compiled into the binary
    ///
    /// Falls back to an empty library if the embedded definition is invalid.
    pub fn builtin() -> Self {
        toml::from_str(DEFAULT_LIBRARY).unwrap_or_else(|e| {
            log::warn!("Built-in pattern library is invalid: {}", e);
            Self::default()
        })
    }

    /// Load a library from a `.json` or `.toml` file
    ///
    /// # Parameters
    /// * `path` - Path to the library file
    ///
    /// # Returns
    /// * `Ok(PatternLibrary)` - Loaded library
    /// * `Err(PatternLibraryError)` - Error reading, parsing or recognising the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PatternLibraryError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let library: PatternLibrary = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            other => return Err(PatternLibraryError::UnsupportedFormat(other.to_string())),
        };

        log::debug!("Loaded pattern library from {}", path.display());
        Ok(library)
    }

    /// Load a library, degrading to an empty one on any failure
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::warn!(
                "Failed to load pattern library {}: {}",
                path.display(),
                e
            );
            Self::default()
        })
    }

    /// Look up a pattern by id in any category
    pub fn find(&self, id: &str) -> Option<&Pattern> {
        self.categories
            .iter()
            .flat_map(|category| category.patterns.iter())
            .find(|pattern| pattern.id == id)
    }

    /// Look up an example by display name or file reference
    pub fn example(&self, name_or_file: &str) -> Option<&ExampleDocument> {
        self.examples
            .iter()
            .find(|example| example.name == name_or_file || example.file == name_or_file)
    }

    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.examples.is_empty()
    }
}

/// Insert a snippet into text, replacing the selected byte range
///
/// The range is clamped to the text and moved back to character
/// boundaries. Returns the new text and the byte offset just past the
/// inserted snippet.
pub fn insert_snippet(text: &str, start: usize, end: usize, snippet: &str) -> (String, usize) {
    let clamp = |offset: usize| {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    };
    let start = clamp(start);
    let end = clamp(end).max(start);

    let mut result = String::with_capacity(text.len() - (end - start) + snippet.len());
    result.push_str(&text[..start]);
    result.push_str(snippet);
    result.push_str(&text[end..]);
    (result, start + snippet.len())
}
