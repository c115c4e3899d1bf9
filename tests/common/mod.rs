//! Shared fixtures for integration tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use toolchain_config::secrets::{LoadError, Secrets, SecretsProvider};

/// Provider that counts as an absent secrets source.
pub struct MissingSecrets;

impl SecretsProvider for MissingSecrets {
    fn resolve(&self) -> Result<Secrets, LoadError> {
        Err(LoadError::NotFound {
            path: PathBuf::from("secrets.json"),
        })
    }
}

/// Build an injected environment from pairs.
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write a secrets record into `dir` and return its path.
pub fn write_secrets(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("secrets.json");
    fs::write(&path, body).unwrap();
    path
}
