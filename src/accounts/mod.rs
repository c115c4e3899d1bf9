//! Signer account derivation.
//!
//! # Responsibilities
//! - Turn a profile's account source into concrete signer addresses
//! - Surface missing secrets at the point they are first needed
//!
//! # Security
//! - Private keys and seed phrases are never logged
//! - Only derived addresses leave this module

pub mod derive;

pub use derive::{derive_addresses, signer_from_private_key, AccountError};
