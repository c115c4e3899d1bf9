//! Secret values and the load error taxonomy.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving secrets.
///
/// This is the only way configuration loading can fail. Missing environment
/// variables never produce one of these.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The secrets file does not exist.
    #[error("secrets file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The secrets file exists but could not be read.
    #[error("failed to read secrets file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The secrets file is not a valid JSON record.
    #[error("malformed secrets file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record parsed but yields no usable private key.
    #[error("secrets file {} does not provide a `privateKey`", path.display())]
    MissingPrivateKey { path: PathBuf },
}

/// Secret material injected into the configuration at load time.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets {
    /// HD wallet seed phrase, empty when unset.
    pub seed_phrase: String,
    /// Optional deploy key, empty when unset.
    pub deploy_key: String,
    /// Private key used by the public networks. Never empty.
    pub private_key: String,
}

impl Secrets {
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            seed_phrase: String::new(),
            deploy_key: String::new(),
            private_key: private_key.into(),
        }
    }

    pub fn with_seed_phrase(mut self, seed_phrase: impl Into<String>) -> Self {
        self.seed_phrase = seed_phrase.into();
        self
    }

    pub fn with_deploy_key(mut self, deploy_key: impl Into<String>) -> Self {
        self.deploy_key = deploy_key.into();
        self
    }
}

/// Mask a secret for display. Empty values stay empty so that a missing
/// secret remains visible.
pub fn redact(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        "<redacted>".to_string()
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("seed_phrase", &redact(&self.seed_phrase))
            .field("deploy_key", &redact(&self.deploy_key))
            .field("private_key", &redact(&self.private_key))
            .finish()
    }
}
