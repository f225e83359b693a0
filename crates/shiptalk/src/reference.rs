use include_dir::{include_dir, Dir};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::errors::StartupError;

// Reference data shipped with the crate
static BUNDLED_DATA: Dir = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Parsed static reference documents, keyed by file name (`climate.json`).
///
/// Loaded once at start-up and shared read-only by every prompt build.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLibrary {
    documents: HashMap<String, Arc<Value>>,
}

impl ReferenceLibrary {
    /// The documents embedded at compile time
    pub fn bundled() -> Result<Self, StartupError> {
        let mut library = Self::default();
        for file in BUNDLED_DATA.files() {
            let Some(name) = json_file_name(file.path()) else {
                continue;
            };
            library.insert_bytes(name, file.contents())?;
        }
        Ok(library)
    }

    /// Every `.json` file directly inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, StartupError> {
        let mut library = Self::default();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            let Some(name) = json_file_name(&path) else {
                continue;
            };
            let contents = fs::read(&path)?;
            library.insert_bytes(name, &contents)?;
        }
        tracing::debug!(
            "Loaded {} reference documents from {}",
            library.documents.len(),
            dir.as_ref().display()
        );
        Ok(library)
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, document: Value) {
        self.documents.insert(name.into(), Arc::new(document));
    }

    fn insert_bytes(&mut self, name: String, contents: &[u8]) -> Result<(), StartupError> {
        let document = serde_json::from_slice(contents).map_err(|source| StartupError::InvalidReference {
            file: name.clone(),
            source,
        })?;
        self.insert(name, document);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Value>> {
        self.documents.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn json_file_name(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return None;
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
}
