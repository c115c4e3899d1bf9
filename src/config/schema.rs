//! Configuration schema definitions.
//!
//! This module defines the configuration handed to the contract toolchain.
//! All types derive Serde traits so the resolved configuration can be
//! emitted as JSON for the toolchain to consume. Field names serialize in
//! camelCase.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::secrets::types::redact;

/// Root configuration: compiler, networks, plugins.
///
/// `Debug` masks the deploy key; account secrets are masked by
/// `AccountSource` and `HdAccounts`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToplevelConfig {
    pub compiler: CompilerSettings,

    pub networks: NetworkRegistry,

    pub plugins: PluginOptions,

    /// Optional deploy key from the environment. Empty when unset and not
    /// referenced by any profile.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deploy_key: String,
}

impl ToplevelConfig {
    /// Copy of this configuration with every non-empty secret masked.
    ///
    /// Empty secrets are left empty so that a missing value stays visible.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.deploy_key = redact(&copy.deploy_key);
        for profile in copy.networks.profiles.values_mut() {
            match &mut profile.accounts {
                AccountSource::Remote => {}
                AccountSource::PrivateKeys { keys } => {
                    for key in keys.iter_mut() {
                        *key = redact(key);
                    }
                }
                AccountSource::Mnemonic(hd) => {
                    if let Some(phrase) = hd.seed_phrase.as_mut() {
                        *phrase = redact(phrase);
                    }
                }
            }
        }
        copy
    }
}

impl fmt::Debug for ToplevelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToplevelConfig")
            .field("compiler", &self.compiler)
            .field("networks", &self.networks)
            .field("plugins", &self.plugins)
            .field("deploy_key", &redact(&self.deploy_key))
            .finish()
    }
}

/// Contract-language compiler settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    /// Compiler release, `major.minor.patch`.
    pub version: String,

    pub optimizer_enabled: bool,

    /// Expected number of contract runs the optimizer tunes for.
    pub optimizer_runs: u32,
}

/// How a profile obtains its signing accounts. Exactly one mode applies.
///
/// `Remote` exists for endpoints that declare no accounts of their own
/// (the local node profile); the other two carry secrets and mask them in
/// `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum AccountSource {
    /// Accounts are managed by the node behind the endpoint.
    Remote,

    /// Accounts derived from a seed phrase.
    Mnemonic(HdAccounts),

    /// An explicit, ordered list of private keys.
    PrivateKeys { keys: Vec<String> },
}

/// Hierarchical-deterministic account derivation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdAccounts {
    /// Seed phrase. `None` means the toolchain's built-in development seed.
    pub seed_phrase: Option<String>,

    /// Derivation path prefix; the account index is appended.
    pub path: String,

    pub initial_index: u32,

    pub count: u32,

    /// Synthetic starting balance in wei (decimal string), for in-process
    /// networks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts_balance: Option<String>,
}

impl fmt::Debug for AccountSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountSource::Remote => f.write_str("Remote"),
            AccountSource::Mnemonic(hd) => f.debug_tuple("Mnemonic").field(hd).finish(),
            AccountSource::PrivateKeys { keys } => {
                let masked: Vec<String> = keys.iter().map(|k| redact(k)).collect();
                f.debug_struct("PrivateKeys").field("keys", &masked).finish()
            }
        }
    }
}

impl fmt::Debug for HdAccounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdAccounts")
            .field("seed_phrase", &self.seed_phrase.as_deref().map(redact))
            .field("path", &self.path)
            .field("initial_index", &self.initial_index)
            .field("count", &self.count)
            .field("accounts_balance", &self.accounts_balance)
            .finish()
    }
}

impl Default for HdAccounts {
    fn default() -> Self {
        Self {
            seed_phrase: None,
            path: "m/44'/60'/0'/0".to_string(),
            initial_index: 0,
            count: 20,
            accounts_balance: None,
        }
    }
}

/// Replay the state of another chain locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkingConfig {
    /// Endpoint of the chain being replayed.
    pub url: String,

    /// Pin the fork to a block. `None` follows the latest block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

/// Named bundle of connection parameters and account-sourcing rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// Registry key.
    pub name: String,

    /// JSON-RPC endpoint. `None` for networks that run inside the toolchain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Fixed gas price in wei.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,

    pub accounts: AccountSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forking: Option<ForkingConfig>,
}

impl NetworkProfile {
    /// Profile reached over JSON-RPC with node-managed accounts.
    pub fn remote(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
            chain_id: None,
            gas_price: None,
            accounts: AccountSource::Remote,
            forking: None,
        }
    }

    pub fn is_forking(&self) -> bool {
        self.forking.is_some()
    }

    /// Synthetic starting balance, if the profile sets one.
    pub fn starting_balance(&self) -> Option<&str> {
        match &self.accounts {
            AccountSource::Mnemonic(hd) => hd.accounts_balance.as_deref(),
            _ => None,
        }
    }
}

/// Profiles keyed by name, plus the name of the default profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRegistry {
    pub default_network: String,

    pub profiles: BTreeMap<String, NetworkProfile>,
}

impl NetworkRegistry {
    pub fn new(default_network: impl Into<String>) -> Self {
        Self {
            default_network: default_network.into(),
            profiles: BTreeMap::new(),
        }
    }

    /// Insert a profile under its own name, returning any profile it replaced.
    pub fn insert(&mut self, profile: NetworkProfile) -> Option<NetworkProfile> {
        self.profiles.insert(profile.name.clone(), profile)
    }

    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        self.profiles.get(name)
    }

    /// The profile named by `default_network`.
    pub fn default_profile(&self) -> Option<&NetworkProfile> {
        self.get(&self.default_network)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Toolchain plugin options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    pub abi_export: AbiExportOptions,

    pub size_report: SizeReportOptions,
}

/// ABI export plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiExportOptions {
    /// Output directory for exported ABIs.
    pub path: String,

    pub run_on_compile: bool,

    /// Empty the output directory before exporting.
    pub clear_before_run: bool,

    /// Write all ABIs into one directory level.
    pub flatten_output: bool,

    pub indent_spacing: u32,

    /// Human-readable signatures instead of JSON ABI.
    pub pretty_print: bool,
}

/// Contract size report plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeReportOptions {
    pub alphabetical_sort: bool,

    pub disambiguate_import_paths: bool,

    pub run_on_compile: bool,

    /// Fail compilation when a contract exceeds the deployable size limit.
    pub strict_fail_on_oversize: bool,
}
