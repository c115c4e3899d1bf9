//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of a resolved `ToplevelConfig`
//! - Check referential integrity (default network exists, keys match names)
//! - Validate value formats (compiler version, endpoint URLs, balances)
//! - Keep forked networks distinguishable from the chains they replay
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ToplevelConfig → Result<(), Vec<ValidationError>>
//! - An empty seed phrase is not an error here; it fails later, when an
//!   account is derived from it

use alloy::primitives::U256;
use thiserror::Error;

use crate::config::schema::{AccountSource, CompilerSettings, NetworkProfile, ToplevelConfig};

/// Oldest compiler release the toolchain can drive.
pub const MIN_COMPILER_VERSION: (u32, u32, u32) = (0, 4, 11);

/// Upper bound on ABI indentation.
pub const MAX_INDENT_SPACING: u32 = 10;

const URL_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("compiler version '{0}' is not of the form major.minor.patch")]
    MalformedCompilerVersion(String),

    #[error("compiler version '{0}' is older than the oldest supported release")]
    UnsupportedCompilerVersion(String),

    #[error("default network '{0}' is not a registered profile")]
    UnknownDefaultNetwork(String),

    #[error("profile registered as '{key}' is named '{name}'")]
    ProfileNameMismatch { key: String, name: String },

    #[error("profile '{profile}' has invalid url '{url}': {reason}")]
    InvalidUrl {
        profile: String,
        url: String,
        reason: String,
    },

    #[error("profile '{0}' lists no private keys")]
    NoPrivateKeys(String),

    #[error("profile '{0}' contains an empty private key")]
    EmptyPrivateKey(String),

    #[error("profile '{0}' derives zero accounts")]
    ZeroAccountCount(String),

    #[error("profile '{profile}' has invalid derivation path '{path}'")]
    InvalidDerivationPath { profile: String, path: String },

    #[error("profile '{profile}' has invalid starting balance '{balance}'")]
    InvalidBalance { profile: String, balance: String },

    #[error("forking profile '{0}' has no starting balance")]
    ForkWithoutBalance(String),

    #[error("forking profile '{0}' has no chain id override")]
    ForkWithoutChainId(String),

    #[error("forking profile '{fork}' reuses chain id {chain_id} of profile '{other}'")]
    ForkChainIdCollision {
        fork: String,
        other: String,
        chain_id: u64,
    },

    #[error("ABI export path is empty")]
    EmptyAbiExportPath,

    #[error("ABI indent spacing {0} exceeds {max}", max = MAX_INDENT_SPACING)]
    IndentSpacingTooLarge(u32),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ToplevelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_compiler(&config.compiler, &mut errors);

    let registry = &config.networks;
    if registry.default_profile().is_none() {
        errors.push(ValidationError::UnknownDefaultNetwork(
            registry.default_network.clone(),
        ));
    }

    for (key, profile) in &registry.profiles {
        if key != &profile.name {
            errors.push(ValidationError::ProfileNameMismatch {
                key: key.clone(),
                name: profile.name.clone(),
            });
        }
        validate_profile(profile, &mut errors);
    }

    for fork in registry.iter().filter(|p| p.is_forking()) {
        let Some(chain_id) = fork.chain_id else {
            errors.push(ValidationError::ForkWithoutChainId(fork.name.clone()));
            continue;
        };
        for other in registry.iter().filter(|p| !p.is_forking()) {
            if other.chain_id == Some(chain_id) {
                errors.push(ValidationError::ForkChainIdCollision {
                    fork: fork.name.clone(),
                    other: other.name.clone(),
                    chain_id,
                });
            }
        }
    }

    let abi = &config.plugins.abi_export;
    if abi.path.trim().is_empty() {
        errors.push(ValidationError::EmptyAbiExportPath);
    }
    if abi.indent_spacing > MAX_INDENT_SPACING {
        errors.push(ValidationError::IndentSpacingTooLarge(abi.indent_spacing));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse `major.minor.patch`.
pub fn parse_compiler_version(version: &str) -> Option<(u32, u32, u32)> {
    let mut parts = version.split('.').map(|p| p.parse::<u32>().ok());
    let major = parts.next()??;
    let minor = parts.next()??;
    let patch = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

fn validate_compiler(compiler: &CompilerSettings, errors: &mut Vec<ValidationError>) {
    match parse_compiler_version(&compiler.version) {
        None => errors.push(ValidationError::MalformedCompilerVersion(
            compiler.version.clone(),
        )),
        Some(version) if version < MIN_COMPILER_VERSION => errors.push(
            ValidationError::UnsupportedCompilerVersion(compiler.version.clone()),
        ),
        Some(_) => {}
    }
}

fn check_url(profile: &str, raw: &str, errors: &mut Vec<ValidationError>) {
    let reason = match url::Url::parse(raw) {
        Ok(parsed) if URL_SCHEMES.contains(&parsed.scheme()) => return,
        Ok(parsed) => format!("unsupported scheme '{}'", parsed.scheme()),
        Err(e) => e.to_string(),
    };
    errors.push(ValidationError::InvalidUrl {
        profile: profile.to_string(),
        url: raw.to_string(),
        reason,
    });
}

fn validate_profile(profile: &NetworkProfile, errors: &mut Vec<ValidationError>) {
    let name = &profile.name;

    if let Some(url) = &profile.url {
        check_url(name, url, errors);
    }
    if let Some(forking) = &profile.forking {
        check_url(name, &forking.url, errors);
    }

    match &profile.accounts {
        AccountSource::Remote => {}
        AccountSource::PrivateKeys { keys } => {
            if keys.is_empty() {
                errors.push(ValidationError::NoPrivateKeys(name.clone()));
            }
            if keys.iter().any(|k| k.trim().is_empty()) {
                errors.push(ValidationError::EmptyPrivateKey(name.clone()));
            }
        }
        AccountSource::Mnemonic(hd) => {
            if hd.count == 0 {
                errors.push(ValidationError::ZeroAccountCount(name.clone()));
            }
            if !hd.path.starts_with("m/") {
                errors.push(ValidationError::InvalidDerivationPath {
                    profile: name.clone(),
                    path: hd.path.clone(),
                });
            }
            if let Some(balance) = &hd.accounts_balance {
                if balance.is_empty() || U256::from_str_radix(balance, 10).is_err() {
                    errors.push(ValidationError::InvalidBalance {
                        profile: name.clone(),
                        balance: balance.clone(),
                    });
                }
            }
        }
    }

    if profile.is_forking() && profile.starting_balance().is_none() {
        errors.push(ValidationError::ForkWithoutBalance(name.clone()));
    }
}
