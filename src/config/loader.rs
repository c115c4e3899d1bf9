//! Configuration loading.

use std::fmt;
use std::path::Path;

use crate::config::defaults::network_registry;
use crate::config::schema::{CompilerSettings, PluginOptions, ToplevelConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::secrets::{DotenvOverlay, EnvSecrets, LoadError, ProcessEnv, SecretsFile, SecretsProvider};

/// Error type for loading plus validation.
#[derive(Debug)]
pub enum ConfigError {
    Load(LoadError),
    Validation(Vec<ValidationError>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Load error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

impl From<LoadError> for ConfigError {
    fn from(e: LoadError) -> Self {
        ConfigError::Load(e)
    }
}

/// Builds a `ToplevelConfig` from the compiled-in defaults and a secrets
/// provider.
#[derive(Debug, Clone)]
pub struct ConfigLoader<P> {
    secrets: P,
}

impl<P: SecretsProvider> ConfigLoader<P> {
    pub fn new(secrets: P) -> Self {
        Self { secrets }
    }

    /// Assemble the configuration.
    ///
    /// Fails only when the secrets provider cannot produce a private key.
    /// Unset environment variables resolve to empty strings.
    pub fn load(&self) -> Result<ToplevelConfig, LoadError> {
        let secrets = self.secrets.resolve()?;

        let config = ToplevelConfig {
            compiler: CompilerSettings::default(),
            networks: network_registry(&secrets),
            plugins: PluginOptions::default(),
            deploy_key: secrets.deploy_key,
        };

        tracing::info!(
            compiler = %config.compiler.version,
            default_network = %config.networks.default_network,
            networks = config.networks.len(),
            "Configuration loaded"
        );

        Ok(config)
    }
}

/// Load from the process environment, an optional dotenv file and a secrets
/// file on disk.
pub fn load_config(env_file: &Path, secrets_file: &Path) -> Result<ToplevelConfig, LoadError> {
    let env = DotenvOverlay::from_path(ProcessEnv, env_file);
    let provider = EnvSecrets::new(env, SecretsFile::new(secrets_file));
    ConfigLoader::new(provider).load()
}

/// Load and validate in one step.
pub fn load_validated(env_file: &Path, secrets_file: &Path) -> Result<ToplevelConfig, ConfigError> {
    let config = load_config(env_file, secrets_file)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{DEFAULT_PROFILE, MAINNET, TESTNET};
    use crate::config::schema::{AccountSource, HdAccounts};
    use crate::secrets::Secrets;

    struct NoSecrets;

    impl SecretsProvider for NoSecrets {
        fn resolve(&self) -> Result<Secrets, LoadError> {
            Err(LoadError::NotFound {
                path: "secrets.json".into(),
            })
        }
    }

    #[test]
    fn test_load_injects_private_key() {
        let config = ConfigLoader::new(Secrets::new("0xabc")).load().unwrap();

        for name in [TESTNET, MAINNET] {
            assert_eq!(
                config.networks.get(name).unwrap().accounts,
                AccountSource::PrivateKeys {
                    keys: vec!["0xabc".to_string()]
                }
            );
        }
    }

    #[test]
    fn test_load_injects_seed_phrase() {
        let secrets = Secrets::new("0xabc").with_seed_phrase("alpha beta");
        let config = ConfigLoader::new(secrets).load().unwrap();

        let default = config.networks.get(DEFAULT_PROFILE).unwrap();
        match &default.accounts {
            AccountSource::Mnemonic(HdAccounts { seed_phrase, .. }) => {
                assert_eq!(seed_phrase.as_deref(), Some("alpha beta"));
            }
            other => panic!("unexpected account source: {:?}", other),
        }
    }

    #[test]
    fn test_load_fails_without_secrets() {
        let result = ConfigLoader::new(NoSecrets).load();
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyAbiExportPath,
            ValidationError::NoPrivateKeys("mainnet".to_string()),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: ABI export path is empty, profile 'mainnet' lists no private keys"
        );
    }
}
