//! The secrets capability injected into the loader.

use crate::secrets::env::EnvSource;
use crate::secrets::file::SecretsFile;
use crate::secrets::types::{LoadError, Secrets};

/// Environment variable holding the HD wallet seed phrase.
pub const SEED_PHRASE_ENV_VAR: &str = "WORKER_SEED";

/// Environment variable holding the optional deploy key.
pub const DEPLOY_KEY_ENV_VAR: &str = "RAINBOW_DEPLOY";

/// Supplies the secret values a configuration needs.
pub trait SecretsProvider {
    fn resolve(&self) -> Result<Secrets, LoadError>;
}

/// A fixed set of secrets resolves to itself.
impl SecretsProvider for Secrets {
    fn resolve(&self) -> Result<Secrets, LoadError> {
        Ok(self.clone())
    }
}

impl<P: SecretsProvider + ?Sized> SecretsProvider for &P {
    fn resolve(&self) -> Result<Secrets, LoadError> {
        (**self).resolve()
    }
}

/// Resolves seed phrase and deploy key from environment variables and the
/// private key from a secrets file.
#[derive(Debug, Clone)]
pub struct EnvSecrets<E> {
    env: E,
    file: SecretsFile,
}

impl<E: EnvSource> EnvSecrets<E> {
    pub fn new(env: E, file: SecretsFile) -> Self {
        Self { env, file }
    }

    fn var_or_empty(&self, key: &str) -> String {
        match self.env.var(key) {
            Some(value) => value,
            None => {
                tracing::debug!(variable = key, "Environment variable unset, using empty default");
                String::new()
            }
        }
    }
}

impl<E: EnvSource> SecretsProvider for EnvSecrets<E> {
    fn resolve(&self) -> Result<Secrets, LoadError> {
        let seed_phrase = self.var_or_empty(SEED_PHRASE_ENV_VAR);
        let deploy_key = self.var_or_empty(DEPLOY_KEY_ENV_VAR);
        let private_key = self.file.read_private_key()?;

        tracing::debug!(
            secrets_file = %self.file.path().display(),
            seed_phrase_set = !seed_phrase.is_empty(),
            deploy_key_set = !deploy_key.is_empty(),
            "Secrets resolved"
        );

        Ok(Secrets {
            seed_phrase,
            deploy_key,
            private_key,
        })
    }
}
