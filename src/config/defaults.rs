//! Compiled-in configuration values.
//!
//! Only the secrets vary between loads; everything here is literal.

use crate::config::schema::{
    AbiExportOptions, AccountSource, CompilerSettings, ForkingConfig, HdAccounts,
    NetworkProfile, NetworkRegistry, SizeReportOptions,
};
use crate::secrets::types::Secrets;

pub const COMPILER_VERSION: &str = "0.8.4";
pub const OPTIMIZER_RUNS: u32 = 500;

pub const LOCALHOST: &str = "localhost";
pub const TESTNET: &str = "testnet";
pub const MAINNET: &str = "mainnet";
/// In-process network that forks the testnet.
pub const SIMULATION: &str = "hardhat";
/// In-process network whose accounts come from the worker seed phrase.
pub const DEFAULT_PROFILE: &str = "default";

pub const DEFAULT_NETWORK: &str = SIMULATION;

pub const LOCALHOST_URL: &str = "http://127.0.0.1:8545";
pub const TESTNET_URL: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";
pub const MAINNET_URL: &str = "https://bsc-dataseed.binance.org/";

pub const TESTNET_CHAIN_ID: u64 = 97;
pub const MAINNET_CHAIN_ID: u64 = 56;
pub const SIMULATION_CHAIN_ID: u64 = 1337;

/// 20 gwei.
pub const GAS_PRICE_WEI: u64 = 20_000_000_000;

/// 10,000 native tokens in wei.
pub const SIMULATION_BALANCE_WEI: &str = "10000000000000000000000";

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: COMPILER_VERSION.to_string(),
            optimizer_enabled: true,
            optimizer_runs: OPTIMIZER_RUNS,
        }
    }
}

impl Default for AbiExportOptions {
    fn default() -> Self {
        Self {
            path: "./data/abi".to_string(),
            run_on_compile: true,
            clear_before_run: true,
            flatten_output: false,
            indent_spacing: 2,
            pretty_print: false,
        }
    }
}

impl Default for SizeReportOptions {
    fn default() -> Self {
        Self {
            alphabetical_sort: true,
            disambiguate_import_paths: false,
            run_on_compile: true,
            strict_fail_on_oversize: true,
        }
    }
}

fn public_network(name: &str, url: &str, chain_id: u64, secrets: &Secrets) -> NetworkProfile {
    NetworkProfile {
        name: name.to_string(),
        url: Some(url.to_string()),
        chain_id: Some(chain_id),
        gas_price: Some(GAS_PRICE_WEI),
        accounts: AccountSource::PrivateKeys {
            keys: vec![secrets.private_key.clone()],
        },
        forking: None,
    }
}

/// The five built-in profiles, with secrets injected.
pub fn network_registry(secrets: &Secrets) -> NetworkRegistry {
    let mut registry = NetworkRegistry::new(DEFAULT_NETWORK);

    registry.insert(NetworkProfile::remote(LOCALHOST, LOCALHOST_URL));
    registry.insert(public_network(TESTNET, TESTNET_URL, TESTNET_CHAIN_ID, secrets));
    registry.insert(public_network(MAINNET, MAINNET_URL, MAINNET_CHAIN_ID, secrets));

    registry.insert(NetworkProfile {
        name: SIMULATION.to_string(),
        url: None,
        chain_id: Some(SIMULATION_CHAIN_ID),
        gas_price: None,
        accounts: AccountSource::Mnemonic(HdAccounts {
            accounts_balance: Some(SIMULATION_BALANCE_WEI.to_string()),
            ..HdAccounts::default()
        }),
        forking: Some(ForkingConfig {
            url: TESTNET_URL.to_string(),
            block_number: None,
        }),
    });

    registry.insert(NetworkProfile {
        name: DEFAULT_PROFILE.to_string(),
        url: None,
        chain_id: None,
        gas_price: None,
        accounts: AccountSource::Mnemonic(HdAccounts {
            seed_phrase: Some(secrets.seed_phrase.clone()),
            ..HdAccounts::default()
        }),
        forking: None,
    });

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PluginOptions;

    #[test]
    fn test_compiler_defaults() {
        let compiler = CompilerSettings::default();
        assert_eq!(compiler.version, "0.8.4");
        assert!(compiler.optimizer_enabled);
        assert_eq!(compiler.optimizer_runs, 500);
    }

    #[test]
    fn test_plugin_defaults() {
        let plugins = PluginOptions::default();
        assert_eq!(plugins.abi_export.path, "./data/abi");
        assert!(plugins.abi_export.clear_before_run);
        assert!(!plugins.abi_export.flatten_output);
        assert_eq!(plugins.abi_export.indent_spacing, 2);
        assert!(plugins.size_report.alphabetical_sort);
        assert!(!plugins.size_report.disambiguate_import_paths);
        assert!(plugins.size_report.strict_fail_on_oversize);
    }

    #[test]
    fn test_registry_profiles() {
        let registry = network_registry(&Secrets::new("0xabc"));
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["default", "hardhat", "localhost", "mainnet", "testnet"]);
        assert_eq!(registry.default_network, "hardhat");

        let localhost = registry.get(LOCALHOST).unwrap();
        assert_eq!(localhost.accounts, AccountSource::Remote);
        assert_eq!(localhost.url.as_deref(), Some("http://127.0.0.1:8545"));

        let mainnet = registry.get(MAINNET).unwrap();
        assert_eq!(mainnet.chain_id, Some(56));
        assert_eq!(mainnet.gas_price, Some(20_000_000_000));
    }

    #[test]
    fn test_simulation_forks_testnet() {
        let registry = network_registry(&Secrets::new("0xabc"));
        let sim = registry.default_profile().unwrap();

        assert_eq!(sim.forking.as_ref().unwrap().url, TESTNET_URL);
        assert_eq!(sim.chain_id, Some(1337));
        assert_eq!(sim.starting_balance(), Some("10000000000000000000000"));
        assert!(sim.url.is_none());
    }
}
