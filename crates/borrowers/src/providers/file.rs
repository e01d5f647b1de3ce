//! File-backed provider
//!
//! Reads a JSON array of borrower objects from disk on every call.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::providers::DEFAULT_DATA_PATH;
use crate::error::Result;
use crate::record::{parse_collection, Collection};

use super::traits::BorrowerProvider;

/// Provider backed by a local JSON file
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Create a provider for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file verbatim, without parsing
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing
    /// the read.
    pub fn read_raw(&self) -> Result<String> {
        debug!("Reading borrowers from {:?}", self.path);
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for FileProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl BorrowerProvider for FileProvider {
    fn name(&self) -> &'static str {
        "Local file"
    }

    fn id(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> Result<Collection> {
        let raw = self.read_raw()?;
        Ok(parse_collection(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("borrowers_test_{}_{}_{}.json", std::process::id(), id, name))
    }

    #[test]
    fn test_default_path() {
        let provider = FileProvider::default();
        assert_eq!(provider.path(), Path::new("data/borrowers.json"));
        assert_eq!(provider.id(), "file");
    }

    #[test]
    fn test_read_raw_is_verbatim() {
        let path = temp_path("raw");
        let content = "[ {\"name\": \"Alice\"} ]\n";
        fs::write(&path, content).unwrap();

        let provider = FileProvider::new(&path);
        assert_eq!(provider.read_raw().unwrap(), content);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_fetch_parses_records() {
        let path = temp_path("fetch");
        fs::write(&path, r#"[{"name":"Alice","phone":"555"},{"name":"Bob"}]"#).unwrap();

        let records = FileProvider::new(&path).fetch().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("name"), Some(&serde_json::json!("Bob")));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_fetch_rereads_file() {
        let path = temp_path("reread");
        let provider = FileProvider::new(&path);

        fs::write(&path, r#"[{"name":"Alice"}]"#).unwrap();
        assert_eq!(provider.fetch().unwrap().len(), 1);

        fs::write(&path, r#"[{"name":"Alice"},{"name":"Bob"}]"#).unwrap();
        assert_eq!(provider.fetch().unwrap().len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let provider = FileProvider::new(temp_path("missing"));
        assert!(matches!(provider.read_raw(), Err(DataError::Io(_))));
        assert!(matches!(provider.fetch(), Err(DataError::Io(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = temp_path("invalid");
        fs::write(&path, "not valid json").unwrap();

        let provider = FileProvider::new(&path);
        assert!(matches!(provider.fetch(), Err(DataError::Parse(_))));
        // Raw reads do not care about the content
        assert!(provider.read_raw().is_ok());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_raw_tolerates_invalid_utf8() {
        let path = temp_path("latin1");
        fs::write(&path, b"[{\"name\":\"Jos\xe9\"}]").unwrap();

        let provider = FileProvider::new(&path);
        assert_eq!(provider.read_raw().unwrap(), "[{\"name\":\"Jos\u{FFFD}\"}]");
        let records = provider.fetch().unwrap();
        assert_eq!(records[0].get("name"), Some(&serde_json::json!("Jos\u{FFFD}")));

        let _ = fs::remove_file(&path);
    }
}
