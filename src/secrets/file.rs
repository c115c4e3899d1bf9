//! JSON secrets record on disk.
//!
//! The record is a JSON object with at least a `privateKey` string:
//! ```json
//! { "privateKey": "0x..." }
//! ```
//! Unknown fields are ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::secrets::types::LoadError;

/// Default location of the secrets record, relative to the working directory.
pub const DEFAULT_SECRETS_PATH: &str = "secrets.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretsRecord {
    private_key: Option<String>,
}

/// Handle to a secrets record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record and return its private key.
    pub fn read_private_key(&self) -> Result<String, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: self.path.clone(),
            },
            _ => LoadError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;

        parse_private_key(&content).map_err(|e| match e {
            ParseFailure::Json(source) => LoadError::Malformed {
                path: self.path.clone(),
                source,
            },
            ParseFailure::NoKey => LoadError::MissingPrivateKey {
                path: self.path.clone(),
            },
        })
    }
}

impl Default for SecretsFile {
    fn default() -> Self {
        Self::new(DEFAULT_SECRETS_PATH)
    }
}

enum ParseFailure {
    Json(serde_json::Error),
    NoKey,
}

fn parse_private_key(content: &str) -> Result<String, ParseFailure> {
    let record: SecretsRecord = serde_json::from_str(content).map_err(ParseFailure::Json)?;
    match record.private_key {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ParseFailure::NoKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_record(dir: &tempfile::TempDir, body: &str) -> SecretsFile {
        let path = dir.path().join("secrets.json");
        fs::write(&path, body).unwrap();
        SecretsFile::new(path)
    }

    #[test]
    fn test_reads_private_key() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_record(&dir, r#"{ "privateKey": "0xabc", "note": "ignored" }"#);
        assert_eq!(file.read_private_key().unwrap(), "0xabc");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = SecretsFile::new(dir.path().join("nope.json"));
        assert!(matches!(file.read_private_key(), Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_record(&dir, "{ privateKey: ");
        assert!(matches!(file.read_private_key(), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_record(&dir, r#"{ "privateKey": 42 }"#);
        assert!(matches!(file.read_private_key(), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_missing_or_blank_key() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_record(&dir, r#"{ "other": "x" }"#);
        assert!(matches!(
            file.read_private_key(),
            Err(LoadError::MissingPrivateKey { .. })
        ));

        let file = write_record(&dir, r#"{ "privateKey": "  " }"#);
        assert!(matches!(
            file.read_private_key(),
            Err(LoadError::MissingPrivateKey { .. })
        ));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(SecretsFile::default().path(), Path::new("secrets.json"));
    }
}
