//! Document persistence
//!
//! A store keeps wireframe text keyed by document id. Content is opaque to
//! the store; nothing here parses or validates it.

use crate::export::{slugify, title_of};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when saving or loading documents
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid document id '{0}': use ASCII letters, digits, '-' or '_'")]
    InvalidId(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("IO error for {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Keyed storage for wireframe documents
pub trait DocumentStore {
    /// Store content under an id, replacing any previous content
    fn save(&mut self, doc_id: &str, content: &str) -> Result<(), StorageError>;

    /// Content stored under an id
    fn load(&self, doc_id: &str) -> Result<String, StorageError>;

    /// Ids of every stored document, sorted
    fn list(&self) -> Result<Vec<String>, StorageError>;
}

/// Check that an id is usable as a key and as a file stem
pub fn validate_id(doc_id: &str) -> Result<(), StorageError> {
    let valid = !doc_id.is_empty()
        && doc_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidId(doc_id.to_string()))
    }
}

/// Id given to a document imported from a file
///
/// Uses the `Title:` value when present and the file stem otherwise.
pub fn import_document_id(content: &str, file_stem: &str) -> String {
    let name = title_of(content).unwrap_or(file_stem.trim());
    format!("loaded-{}", slugify(name))
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    documents: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, doc_id: &str, content: &str) -> Result<(), StorageError> {
        validate_id(doc_id)?;
        self.documents.insert(doc_id.to_string(), content.to_string());
        Ok(())
    }

    fn load(&self, doc_id: &str) -> Result<String, StorageError> {
        validate_id(doc_id)?;
        self.documents
            .get(doc_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(doc_id.to_string()))
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.documents.keys().cloned().collect())
    }
}

/// Store keeping one `<id>.txt` file per document under a root directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// The root directory is created on first save
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, doc_id: &str) -> PathBuf {
        self.root.join(format!("{doc_id}.txt"))
    }
}

impl DocumentStore for DirectoryStore {
    fn save(&mut self, doc_id: &str, content: &str) -> Result<(), StorageError> {
        validate_id(doc_id)?;
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path_for(doc_id);
        fs::write(&path, content).map_err(|source| StorageError::Io { path: path.clone(), source })?;
        log::debug!("Saved document '{}' to {}", doc_id, path.display());
        Ok(())
    }

    fn load(&self, doc_id: &str) -> Result<String, StorageError> {
        validate_id(doc_id)?;
        let path = self.path_for(doc_id);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(doc_id.to_string())
            } else {
                StorageError::Io { path, source }
            }
        })
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StorageError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_id(stem).is_ok() {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();

        store.save("home", "# Home").unwrap();
        store.save("about", "# About").unwrap();

        assert_eq!(store.load("home").unwrap(), "# Home");
        assert_eq!(store.list().unwrap(), vec!["about", "home"]);
    }

    #[test]
    fn test_save_replaces_content() {
        let mut store = MemoryStore::new();

        store.save("home", "old").unwrap();
        store.save("home", "new").unwrap();

        assert_eq!(store.load("home").unwrap(), "new");
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_document() {
        let store = MemoryStore::new();

        assert!(matches!(store.load("nope"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_invalid_ids_are_rejected() {
        let mut store = MemoryStore::new();

        assert!(matches!(
            store.save("../escape", "x"),
            Err(StorageError::InvalidId(_))
        ));
        assert!(matches!(store.save("", "x"), Err(StorageError::InvalidId(_))));
        assert!(store.save("loaded-my_page-2", "x").is_ok());
    }

    #[test]
    fn test_directory_store_roundtrip() {
        // Arrange: A store rooted in a directory that does not exist yet
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path().join("docs"));

        // Act
        store.save("login", "Title: Login\n# Sign in").unwrap();
        store.save("home", "# Home").unwrap();

        // Assert: Files on disk, sorted listing, content intact
        assert!(dir.path().join("docs/login.txt").exists());
        assert_eq!(store.list().unwrap(), vec!["home", "login"]);
        assert_eq!(store.load("login").unwrap(), "Title: Login\n# Sign in");
    }

    #[test]
    fn test_directory_store_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::write(dir.path().join("page.txt"), "x").unwrap();
        let store = DirectoryStore::new(dir.path());

        assert_eq!(store.list().unwrap(), vec!["page"]);
    }

    #[test]
    fn test_directory_store_missing_root_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path().join("absent"));

        assert!(store.list().unwrap().is_empty());
        assert!(matches!(store.load("x"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_import_id_prefers_title() {
        assert_eq!(
            import_document_id("Title: Contact Us\n# Contact", "contact-page"),
            "loaded-contact-us"
        );
    }

    #[test]
    fn test_import_id_falls_back_to_file_stem() {
        assert_eq!(import_document_id("# No title", "Draft 2"), "loaded-draft-2");
    }
}
