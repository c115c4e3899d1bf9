//! Address derivation from private keys and seed phrases.

use alloy::primitives::Address;
use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner};
use thiserror::Error;

use crate::config::schema::{AccountSource, HdAccounts, NetworkProfile};

/// Errors raised while deriving accounts for a profile.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Accounts belong to the node or to the toolchain's built-in seed.
    #[error("accounts of profile '{0}' are managed by the toolchain")]
    ToolchainManaged(String),

    /// The secret this profile depends on was never provided.
    #[error("profile '{0}' has an empty seed phrase; set it in the environment")]
    MissingSecret(String),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("derivation failed for profile '{profile}': {reason}")]
    Derivation { profile: String, reason: String },
}

/// Parse a hex private key, with or without `0x`.
pub fn signer_from_private_key(private_key_hex: &str) -> Result<PrivateKeySigner, AccountError> {
    let key_hex = private_key_hex
        .strip_prefix("0x")
        .unwrap_or(private_key_hex);

    key_hex
        .parse::<PrivateKeySigner>()
        .map_err(|e| AccountError::InvalidKey(e.to_string()))
}

fn derive_from_seed(
    profile: &str,
    phrase: &str,
    hd: &HdAccounts,
    count: u32,
) -> Result<Vec<Address>, AccountError> {
    let derivation = |e: alloy::signers::local::LocalSignerError| AccountError::Derivation {
        profile: profile.to_string(),
        reason: e.to_string(),
    };

    (hd.initial_index..hd.initial_index.saturating_add(count))
        .map(|index| {
            let signer = MnemonicBuilder::<English>::default()
                .phrase(phrase)
                .derivation_path(format!("{}/{}", hd.path, index))
                .map_err(derivation)?
                .build()
                .map_err(derivation)?;
            Ok(signer.address())
        })
        .collect()
}

/// Derive the signer addresses a profile would use.
///
/// `limit` caps the number of HD accounts; it defaults to the profile's own
/// count. Explicit key lists are always returned in full.
pub fn derive_addresses(
    profile: &NetworkProfile,
    limit: Option<u32>,
) -> Result<Vec<Address>, AccountError> {
    let addresses = match &profile.accounts {
        AccountSource::Remote => {
            return Err(AccountError::ToolchainManaged(profile.name.clone()));
        }
        AccountSource::PrivateKeys { keys } => keys
            .iter()
            .map(|k| signer_from_private_key(k).map(|s| s.address()))
            .collect::<Result<Vec<_>, _>>()?,
        AccountSource::Mnemonic(hd) => match hd.seed_phrase.as_deref() {
            None => return Err(AccountError::ToolchainManaged(profile.name.clone())),
            Some("") => return Err(AccountError::MissingSecret(profile.name.clone())),
            Some(phrase) => {
                let count = limit.map_or(hd.count, |l| l.min(hd.count));
                derive_from_seed(&profile.name, phrase, hd, count)?
            }
        },
    };

    tracing::info!(
        profile = %profile.name,
        accounts = addresses.len(),
        "Accounts derived"
    );

    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known development key and seed (first account of both)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";
    const FIRST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
    const SECOND_ADDRESS: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

    fn profile(accounts: AccountSource) -> NetworkProfile {
        NetworkProfile {
            name: "test".to_string(),
            url: None,
            chain_id: None,
            gas_price: None,
            accounts,
            forking: None,
        }
    }

    fn hd(seed_phrase: Option<&str>) -> AccountSource {
        AccountSource::Mnemonic(HdAccounts {
            seed_phrase: seed_phrase.map(str::to_string),
            ..HdAccounts::default()
        })
    }

    fn lower(addresses: &[Address]) -> Vec<String> {
        addresses.iter().map(|a| a.to_string().to_lowercase()).collect()
    }

    #[test]
    fn test_private_key_with_and_without_prefix() {
        let plain = signer_from_private_key(TEST_PRIVATE_KEY).unwrap();
        let prefixed = signer_from_private_key(&format!("0x{}", TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(plain.address(), prefixed.address());
        assert_eq!(plain.address().to_string().to_lowercase(), FIRST_ADDRESS);
    }

    #[test]
    fn test_invalid_private_key() {
        let result = signer_from_private_key("0xabc");
        assert!(matches!(result, Err(AccountError::InvalidKey(_))));
    }

    #[test]
    fn test_addresses_from_keys() {
        let source = AccountSource::PrivateKeys {
            keys: vec![TEST_PRIVATE_KEY.to_string()],
        };
        let addresses = derive_addresses(&profile(source), Some(0)).unwrap();
        assert_eq!(lower(&addresses), vec![FIRST_ADDRESS]);
    }

    #[test]
    fn test_addresses_from_seed() {
        let addresses = derive_addresses(&profile(hd(Some(TEST_MNEMONIC))), Some(2)).unwrap();
        assert_eq!(lower(&addresses), vec![FIRST_ADDRESS, SECOND_ADDRESS]);
    }

    #[test]
    fn test_initial_index_offsets_derivation() {
        let source = AccountSource::Mnemonic(HdAccounts {
            seed_phrase: Some(TEST_MNEMONIC.to_string()),
            initial_index: 1,
            count: 1,
            ..HdAccounts::default()
        });
        let addresses = derive_addresses(&profile(source), None).unwrap();
        assert_eq!(lower(&addresses), vec![SECOND_ADDRESS]);
    }

    #[test]
    fn test_empty_seed_surfaces_missing_secret() {
        let result = derive_addresses(&profile(hd(Some(""))), None);
        assert!(matches!(result, Err(AccountError::MissingSecret(_))));
    }

    #[test]
    fn test_toolchain_managed_sources() {
        assert!(matches!(
            derive_addresses(&profile(hd(None)), None),
            Err(AccountError::ToolchainManaged(_))
        ));
        assert!(matches!(
            derive_addresses(&profile(AccountSource::Remote), None),
            Err(AccountError::ToolchainManaged(_))
        ));
    }

    #[test]
    fn test_invalid_seed_phrase() {
        let result = derive_addresses(&profile(hd(Some("not a real mnemonic"))), Some(1));
        assert!(matches!(result, Err(AccountError::Derivation { .. })));
    }
}
