//! Toolchain configuration loader.
//!
//! Assembles the compiler, network and plugin settings handed to a
//! smart-contract toolchain, injecting secrets from the environment and a
//! local secrets record.

pub mod accounts;
pub mod config;
pub mod observability;
pub mod secrets;

pub use config::{ConfigLoader, ToplevelConfig};
pub use secrets::{LoadError, SecretsProvider};
